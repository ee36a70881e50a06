use crate::catalog::ReflectorId;
use crate::letters::{ALPHABET_LEN, Wiring};

/// The fixed reflector at the left end of the rotor stack.
#[derive(Debug, Clone)]
pub struct Reflector {
    table: &'static Wiring,
}

impl Reflector {
    pub fn new(id: ReflectorId) -> Self {
        Self { table: id.table() }
    }

    /// Letter wired to contact `index`. The caller has already taken the
    /// left rotor's position out of the index.
    pub fn reflect(&self, index: usize) -> u8 {
        self.table[index % ALPHABET_LEN]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::index;

    #[test]
    fn test_reflect_is_an_involution() {
        for id in ReflectorId::ALL {
            let reflector = Reflector::new(id);
            for i in 0..ALPHABET_LEN {
                let out = reflector.reflect(i);
                assert_ne!(index(out), i);
                assert_eq!(index(reflector.reflect(index(out))), i);
            }
        }
    }

    #[test]
    fn test_reflector_b() {
        let reflector = Reflector::new(ReflectorId::B);
        assert_eq!(reflector.reflect(0), b'Y');
        assert_eq!(reflector.reflect(index(b'Y')), b'A');
    }
}
