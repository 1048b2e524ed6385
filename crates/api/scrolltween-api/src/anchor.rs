//! Anchor expressions: `<element-anchor>-<viewport-anchor>` boundary values.
//!
//! `"top-middle"` reads as "the scroll offset at which the element's top edge
//! aligns with the middle of the viewport". The lexical shape is
//! `^[a-z]+-[a-z]+$`; unknown anchor tokens are rejected at parse time rather
//! than silently contributing zero.

use serde::{Deserialize, Serialize};

use crate::geometry::ElementRect;
use crate::value::{ScrollValue, ValueError};

/// One of the three recognized alignment anchors.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    fn from_token(token: &str, raw: &str) -> Result<Self, ValueError> {
        match token {
            "top" => Ok(Anchor::Top),
            "middle" => Ok(Anchor::Middle),
            "bottom" => Ok(Anchor::Bottom),
            _ => Err(ValueError::UnknownAnchor {
                token: token.to_string(),
                raw: raw.to_string(),
            }),
        }
    }
}

/// A parsed relative boundary expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RelativeExpr {
    /// Anchor on the element (the expression's prefix token).
    pub elem_anchor: Anchor,
    /// Anchor on the viewport (the expression's suffix token).
    pub viewport_anchor: Anchor,
}

impl RelativeExpr {
    /// Parse an `<anchor>-<anchor>` expression.
    /// Fails with [`ValueError::NotRelative`] when the lexical shape is wrong
    /// and [`ValueError::UnknownAnchor`] for tokens outside top/middle/bottom.
    pub fn parse(raw: &str) -> Result<Self, ValueError> {
        if !is_relative(raw) {
            return Err(ValueError::NotRelative(raw.to_string()));
        }
        let (elem, viewport) = raw.split_once('-').expect("shape checked above");
        Ok(Self {
            elem_anchor: Anchor::from_token(elem, raw)?,
            viewport_anchor: Anchor::from_token(viewport, raw)?,
        })
    }

    /// Resolve to the absolute pixel offset at which the element anchor meets
    /// the viewport anchor, given the element's current viewport-relative rect
    /// and the current scroll state.
    pub fn resolve(
        &self,
        rect: &ElementRect,
        scroll_offset: f32,
        viewport_height: f32,
    ) -> ScrollValue {
        let mut y = 0.0;

        match self.viewport_anchor {
            Anchor::Top => {}
            Anchor::Middle => y -= viewport_height / 2.0,
            Anchor::Bottom => y -= viewport_height,
        }

        let document_top = rect.top + scroll_offset;
        match self.elem_anchor {
            Anchor::Top => y += document_top,
            Anchor::Middle => y += document_top + rect.height / 2.0,
            Anchor::Bottom => y += document_top + rect.height,
        }

        ScrollValue::px(y)
    }
}

/// True iff the raw string has the `<anchor>-<anchor>` lexical shape:
/// two non-empty lowercase-alphabetic tokens joined by a single dash.
pub fn is_relative(raw: &str) -> bool {
    match raw.split_once('-') {
        Some((a, b)) => {
            !a.is_empty()
                && !b.is_empty()
                && a.chars().all(|c| c.is_ascii_lowercase())
                && b.chars().all(|c| c.is_ascii_lowercase())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_shape() {
        assert!(is_relative("top-middle"));
        assert!(is_relative("bottom-bottom"));
        assert!(!is_relative("120px"));
        assert!(!is_relative("top-"));
        assert!(!is_relative("-middle"));
        assert!(!is_relative("top-Mid"));
        assert!(!is_relative("top-middle-bottom"));
    }

    #[test]
    fn parse_recognizes_anchor_pairs() {
        let expr = RelativeExpr::parse("top-middle").unwrap();
        assert_eq!(expr.elem_anchor, Anchor::Top);
        assert_eq!(expr.viewport_anchor, Anchor::Middle);
    }

    #[test]
    fn parse_rejects_unknown_anchor_tokens() {
        assert!(matches!(
            RelativeExpr::parse("top-center"),
            Err(ValueError::UnknownAnchor { token, .. }) if token == "center"
        ));
        assert!(matches!(
            RelativeExpr::parse("12px"),
            Err(ValueError::NotRelative(_))
        ));
    }

    #[test]
    fn resolve_aligns_element_anchor_with_viewport_anchor() {
        // Element top at document offset 500, viewport 800 tall.
        let rect = ElementRect::new(500.0, 200.0);
        let expr = RelativeExpr::parse("top-middle").unwrap();
        assert_eq!(expr.resolve(&rect, 0.0, 800.0), ScrollValue::px(100.0));

        // The same element seen after scrolling 100px: rect.top shrinks, the
        // resolved document offset stays put.
        let scrolled = ElementRect::new(400.0, 200.0);
        assert_eq!(expr.resolve(&scrolled, 100.0, 800.0), ScrollValue::px(100.0));

        let expr = RelativeExpr::parse("bottom-bottom").unwrap();
        assert_eq!(expr.resolve(&rect, 0.0, 800.0), ScrollValue::px(-100.0));

        let expr = RelativeExpr::parse("middle-top").unwrap();
        assert_eq!(expr.resolve(&rect, 0.0, 800.0), ScrollValue::px(600.0));
    }
}
