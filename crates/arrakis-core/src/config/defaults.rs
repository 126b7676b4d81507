//! Built-in Arrakis map and scenario

pub const MAP_NAME: &str = "Arrakis";

pub const ARRAKEEN: &str = "Arrakeen";
pub const SIETCH_TABR: &str = "Sietch Tabr";
pub const OASIS_DEL_NORTE: &str = "Oasis del Norte";
pub const CAMPAMENTO_FREMEN: &str = "Campamento Fremen";
pub const OASIS_DEL_ESTE: &str = "Oasis del Este";
pub const MONTANA_DE_LA_ESPECIA: &str = "Montaña de la Especia";
pub const ZONA_PELIGROSA: &str = "Zona Peligrosa";

pub const PATH_FROM: &str = ARRAKEEN;
pub const PATH_TO: &str = OASIS_DEL_NORTE;
pub const ROUTE_FROM: &str = ARRAKEEN;
pub const ROUTE_TO: &str = MONTANA_DE_LA_ESPECIA;
pub const AVOID: &str = ZONA_PELIGROSA;
pub const START: &str = ARRAKEEN;

pub const TRIALS: u32 = 100;

/// Adjacency of the Arrakis desert map, in declaration order
pub const ARRAKIS: &[(&str, &[&str])] = &[
    (
        ARRAKEEN,
        &[SIETCH_TABR, OASIS_DEL_NORTE, CAMPAMENTO_FREMEN],
    ),
    (
        SIETCH_TABR,
        &[ARRAKEEN, OASIS_DEL_ESTE, MONTANA_DE_LA_ESPECIA],
    ),
    (OASIS_DEL_NORTE, &[ARRAKEEN, CAMPAMENTO_FREMEN]),
    (
        CAMPAMENTO_FREMEN,
        &[ARRAKEEN, OASIS_DEL_NORTE, OASIS_DEL_ESTE],
    ),
    (
        OASIS_DEL_ESTE,
        &[SIETCH_TABR, CAMPAMENTO_FREMEN, ZONA_PELIGROSA],
    ),
    (MONTANA_DE_LA_ESPECIA, &[SIETCH_TABR, ZONA_PELIGROSA]),
    (ZONA_PELIGROSA, &[OASIS_DEL_ESTE, MONTANA_DE_LA_ESPECIA]),
];
