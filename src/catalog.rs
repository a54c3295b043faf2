//! The slide catalog: a fixed, ordered list of slide descriptors.
//!
//! The catalog is purely declarative data. It is compiled in, never mutated,
//! and its order defines navigation and thumbnail order.

use crate::SlideDescriptor;

/// An ordered, fixed-size list of slide descriptors
#[derive(Debug, Clone)]
pub struct SlideCatalog {
    slides: Vec<SlideDescriptor>,
}

impl SlideCatalog {
    /// The built-in six-slide marketing deck
    pub fn builtin() -> Self {
        Self {
            slides: vec![
                SlideDescriptor::new(0, "Capa - Erro Fatal"),
                SlideDescriptor::new(1, "A Regra dos 3s"),
                SlideDescriptor::new(2, "Dica 1: Genérico"),
                SlideDescriptor::new(3, "Dica 2: Botão Invisível"),
                SlideDescriptor::new(4, "Dica 3: Poder do Sim"),
                SlideDescriptor::new(5, "CTA Final"),
            ],
        }
    }

    /// Number of slides in the deck
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Descriptor at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    /// Iterate descriptors in navigation order
    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_ordered_slides() {
        let catalog = SlideCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        for (i, slide) in catalog.iter().enumerate() {
            assert_eq!(slide.id as usize, i);
        }
    }

    #[test]
    fn get_out_of_range_is_none() {
        let catalog = SlideCatalog::builtin();
        assert!(catalog.get(6).is_none());
        assert!(catalog.get(0).is_some());
    }

    #[test]
    fn titles_are_stable() {
        let catalog = SlideCatalog::builtin();
        assert_eq!(catalog.get(0).unwrap().title, "Capa - Erro Fatal");
        assert_eq!(catalog.get(5).unwrap().title, "CTA Final");
    }
}
