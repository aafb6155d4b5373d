use sea_orm::EntityTrait;

/// User facing Lithuanian labels for an entity and its columns.
///
/// the label strings are shown verbatim on the shop UI, so they must
/// not be translated or reworded when columns are renamed.
pub trait EntityLabels: EntityTrait {
    /// singular display name, eg: "Automobilis"
    const VERBOSE_NAME: &'static str;

    /// plural display name, eg: "Automobiliai"
    const VERBOSE_NAME_PLURAL: &'static str;

    /// display label for a column, `None` for columns that are never
    /// shown to users (ids, row timestamps)
    fn column_label(col: Self::Column) -> Option<&'static str>;
}
