// SPDX-License-Identifier: Apache-2.0
use multibase::Base;

/// Human readable name of a [Base]
pub fn base_name(b: Base) -> String {
    format!("{:?}", b)
}

/// Iterator over every supported [Base] following the one it was created from, in code table
/// order. The default iterator yields all of them.
#[derive(Clone, Debug, Default)]
pub struct BaseIter {
    next: usize,
}

impl From<Base> for BaseIter {
    fn from(b: Base) -> Self {
        let next = Base::ALL
            .iter()
            .position(|x| *x == b)
            .map_or(Base::ALL.len(), |i| i + 1);
        Self { next }
    }
}

impl Iterator for BaseIter {
    type Item = Base;

    fn next(&mut self) -> Option<Self::Item> {
        let b = Base::ALL.get(self.next).copied();
        if b.is_some() {
            self.next += 1;
        }
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_base_name() {
        let _s = span!(Level::INFO, "test_base_name").entered();
        assert_eq!(base_name(Base::Base16Upper), "Base16Upper".to_string());
    }

    #[test]
    fn test_iter_all() {
        let _s = span!(Level::INFO, "test_iter_all").entered();
        assert_eq!(Base::ALL.len(), BaseIter::default().count());
    }

    #[test]
    fn test_iter_skips_start() {
        let _s = span!(Level::INFO, "test_iter_skips_start").entered();
        let mut itr = BaseIter::from(Base::ALL[0]);
        assert_eq!(Some(Base::ALL[1]), itr.next());
        assert_eq!(Base::ALL.len() - 2, itr.count());
    }
}
