//! Shape catalog and per-round template selection.
//!
//! The `ShapeLibrary` stores every template a round may draw from and
//! provides lookup by id. `ShapeLibrary::standard()` is the game's catalog
//! of 18 shapes.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{GameRng, RoundDraw};

use super::template::ShapeTemplate;

/// Standard catalog: id, display name, relative coordinates.
const STANDARD_SHAPES: &[(&str, &str, &[(i32, i32)])] = &[
    // Size 3 (1pt)
    ("3-line", "Line 3", &[(0, 0), (1, 0), (2, 0)]),
    ("3-l", "L", &[(0, 0), (1, 0), (0, 1)]),
    ("3-v", "V", &[(0, 0), (1, 1), (-1, 1)]),
    ("3-corner", "Corner", &[(0, 0), (1, 0), (1, 1)]),
    ("3-diagonal", "Diagonal 3", &[(0, 0), (1, 1), (2, 2)]),
    // Size 4 (3pt)
    ("4-line", "Line 4", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    ("4-square", "Square", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
    ("4-t", "T", &[(0, 0), (-1, 0), (1, 0), (0, 1)]),
    ("4-s", "S", &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    ("4-z", "Z", &[(0, 0), (1, 0), (1, 1), (0, 1)]),
    ("4-l-big", "Big L", &[(0, 0), (0, 1), (0, 2), (1, 0)]),
    // Size 5 (5pt)
    ("5-line", "Line 5", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    ("5-cross", "Cross", &[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]),
    ("5-u", "U", &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]),
    ("5-t-big", "Big T", &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
    // Size 6 (10pt)
    ("6-line", "Line 6", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]),
    ("6-stairs", "Stairs", &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)]),
    ("6-rect", "Rectangle", &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]),
];

/// Catalog of shape templates.
///
/// ## Example
///
/// ```
/// use shape_drop::shapes::ShapeLibrary;
///
/// let library = ShapeLibrary::standard();
/// let line = library.get("3-line").unwrap();
///
/// assert_eq!(line.size(), 3);
/// assert_eq!(line.points, 1);
/// ```
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    templates: Vec<ShapeTemplate>,
    by_id: FxHashMap<String, usize>,
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShapeLibrary {
    /// The standard 18-shape catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_templates(
            STANDARD_SHAPES
                .iter()
                .map(|&(id, name, cells)| ShapeTemplate::new(id, name, cells)),
        )
    }

    /// Build a catalog from arbitrary templates.
    ///
    /// A later template with an already-seen id replaces the earlier one.
    pub fn from_templates(templates: impl IntoIterator<Item = ShapeTemplate>) -> Self {
        let mut library = Self {
            templates: Vec::new(),
            by_id: FxHashMap::default(),
        };
        for template in templates {
            match library.by_id.get(&template.id) {
                Some(&index) => library.templates[index] = template,
                None => {
                    library.by_id.insert(template.id.clone(), library.templates.len());
                    library.templates.push(template);
                }
            }
        }
        library
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ShapeTemplate> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    /// All templates in catalog order.
    #[must_use]
    pub fn templates(&self) -> &[ShapeTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Draw the active templates for one round, without replacement.
    ///
    /// Up to `draw.small_quota` templates come from the shapes of size
    /// `draw.small_max_size` or less; the rest of the round is drawn from
    /// everything left, small or large. Returns fewer than `draw.count`
    /// templates only if the catalog runs out.
    pub fn select_round(&self, rng: &mut GameRng, draw: &RoundDraw) -> Vec<ShapeTemplate> {
        let (mut small, large): (Vec<&ShapeTemplate>, Vec<&ShapeTemplate>) = self
            .templates
            .iter()
            .partition(|t| t.size() <= draw.small_max_size);

        let mut selected = Vec::with_capacity(draw.count);

        while selected.len() < draw.small_quota.min(draw.count) && !small.is_empty() {
            let index = rng.gen_range_usize(0..small.len());
            selected.push(small.remove(index).clone());
        }

        let mut remaining = small;
        remaining.extend(large);
        while selected.len() < draw.count && !remaining.is_empty() {
            let index = rng.gen_range_usize(0..remaining.len());
            selected.push(remaining.remove(index).clone());
        }

        debug!(
            templates = ?selected.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            "drew round templates"
        );
        selected
    }
}
