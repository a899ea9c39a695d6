//! DNA enthalpy and entropy change parameters.

use crate::{BpEnergy, Comp, Energies};

use std::sync::LazyLock;

pub fn complement() -> Comp {
    pub static RAW_COMPLEMENT: [(u8, u8); 4] =
        [(b'A', b'T'), (b'T', b'A'), (b'G', b'C'), (b'C', b'G')];

    Comp::from_iter(RAW_COMPLEMENT)
}

/// Nearest-neighbor enthalpy (kcal/mol) and entropy (eu), plus the
/// terminal initiation and symmetry corrections.
///
/// Adapted from Table 1 in:
/// Allawi and SantaLucia (1997), Biochemistry 36: 10581-10594
///
/// Only one pair of each reverse-complement class is listed, the other
/// is filled in by [`BpEnergy::duplex`].
pub fn nn() -> BpEnergy {
    pub static RAW_NN: [(&[u8], (f64, f64)); 10] = [
        (b"AA", (-7.9, -22.2)),
        (b"AT", (-7.2, -20.4)),
        (b"TA", (-7.2, -21.3)),
        (b"CA", (-8.5, -22.7)),
        (b"GT", (-8.4, -22.4)),
        (b"CT", (-7.8, -21.0)),
        (b"GA", (-8.2, -22.2)),
        (b"CG", (-10.6, -27.2)),
        (b"GC", (-9.8, -24.4)),
        (b"GG", (-8.0, -19.9)),
    ];

    pub static RAW_INIT: [(&[u8], (f64, f64)); 3] = [
        (b"init_G/C", (0.1, -2.8)),
        (b"init_A/T", (2.3, 4.1)),
        (b"sym", (0.0, -1.4)),
    ];

    let mut nn = BpEnergy::duplex(&complement(), RAW_NN);
    nn.extend(RAW_INIT);
    nn
}

pub fn calc_dna() -> Energies {
    Energies {
        complement: complement(),
        nn: nn(),
    }
}

pub fn dna() -> &'static Energies {
    pub static DNA: LazyLock<Energies> = LazyLock::new(calc_dna);
    &DNA
}
