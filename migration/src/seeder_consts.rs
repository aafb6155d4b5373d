/// (make, model) pairs for the seeded vehicle fleet
pub const VEHICLE_MODELS: &[(&str, &str)] = &[
    ("Toyota", "Corolla"),
    ("Volkswagen", "Golf"),
    ("Volkswagen", "Passat"),
    ("BMW", "320d"),
    ("Audi", "A4"),
    ("Ford", "Focus"),
    ("Opel", "Astra"),
    ("Renault", "Megane"),
    ("Škoda", "Octavia"),
];

/// (name, price) pairs for the workshop service catalog
pub const SERVICES: &[(&str, i32)] = &[
    ("Tepalų keitimas", 45),
    ("Padangų montavimas", 25),
    ("Ratų suvedimas", 30),
    ("Stabdžių kaladėlių keitimas", 60),
    ("Variklio diagnostika", 35),
    ("Kondicionieriaus pildymas", 40),
    ("Techninė apžiūra", 20),
    ("Kėbulo dažymas", 350),
];
