#![doc = include_str!("../README.md")]

mod util;

pub mod dna;
pub mod tm;

use std::ops::Index;

pub use dna::dna;
pub use tm::{SaltConditions, TmError, TmResult, compute_tm, compute_tm_uncorrected};

use rustc_hash::FxHashMap as HashMap;

/// Load-once DNA duplex parameters.
#[derive(Debug)]
pub struct Energies {
    pub complement: Comp,
    pub nn: BpEnergy,
}

/// Watson-Crick complement lookup, indexed by ASCII byte.
#[derive(Debug)]
pub struct Comp([Option<u8>; 256]);

impl FromIterator<(u8, u8)> for Comp {
    fn from_iter<T: IntoIterator<Item = (u8, u8)>>(iter: T) -> Self {
        let mut this = Self([None; 256]);
        for (i, b) in iter {
            this.0[i as usize] = Some(b);
        }
        this
    }
}

impl Comp {
    pub fn get(&self, b: u8) -> Option<u8> {
        self.0[b as usize]
    }

    pub fn contains(&self, b: u8) -> bool {
        self.get(b).is_some()
    }
}

/// Enthalpy and entropy pairs keyed by short byte strings (at most 8 bytes).
#[derive(Debug, Default)]
pub struct BpEnergy {
    values: HashMap<u64, (f64, f64)>,
}

pub fn interpret_bytes<'a>(mut b: impl Iterator<Item = &'a u8>) -> u64 {
    u64::from_be_bytes(std::array::from_fn(|_| b.next().copied().unwrap_or(0)))
}

impl BpEnergy {
    /// Build a duplex table where every key also answers for its reverse
    /// complement. Keys must be made of bases known to `complement`.
    pub fn duplex<'a, I>(complement: &Comp, iter: I) -> Self
    where
        I: IntoIterator<Item = (&'a [u8], (f64, f64))>,
    {
        let mut values = HashMap::default();

        for (b, v) in iter {
            assert!(b.len() <= 8);
            let forward = interpret_bytes(b.iter());
            let rc: Vec<u8> = b.iter().rev().filter_map(|&x| complement.get(x)).collect();
            assert_eq!(rc.len(), b.len(), "non-nucleotide key in duplex table");

            values.insert(forward, v);
            values.insert(interpret_bytes(rc.iter()), v);
        }

        Self { values }
    }

    pub fn extend<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (&'a [u8], (f64, f64))>,
    {
        self.values.extend(values.into_iter().map(|(b, v)| {
            assert!(b.len() <= 8);
            (interpret_bytes(b.iter()), v)
        }));
    }

    pub fn get<const N: usize>(&self, b: [u8; N]) -> Option<(f64, f64)> {
        self.values.get(&interpret_bytes(b.iter())).copied()
    }

    pub fn contains_key<const N: usize>(&self, b: [u8; N]) -> bool {
        self.get(b).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<const N: usize> Index<[u8; N]> for BpEnergy {
    type Output = (f64, f64);

    fn index(&self, b: [u8; N]) -> &Self::Output {
        &self.values[&interpret_bytes(b.iter())]
    }
}
