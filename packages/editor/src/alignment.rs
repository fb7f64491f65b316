//! Alignment and distribution over a multi-selection
//!
//! Each operation only plans a batch of geometry patches; the editor applies
//! the batch with one `apply_many`, so a locked member rejects the whole
//! operation and a successful one is a single history entry.

use crate::ElementPatch;
use serde::{Deserialize, Serialize};
use weave_model::{Element, ElementId};

/// Minimum selection size for any alignment operation
pub const MIN_SELECTION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignOp {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
    DistributeHorizontally,
    DistributeVertically,
    /// Resize to the first selected element's width
    MatchWidth,
    /// Resize to the first selected element's height
    MatchHeight,
}

pub type Batch = Vec<(ElementId, ElementPatch)>;

/// Plan the patches for `op`; `elements` is in selection order
pub fn plan(op: AlignOp, elements: &[&Element]) -> Batch {
    if elements.len() < MIN_SELECTION {
        return Vec::new();
    }

    match op {
        AlignOp::Left => {
            let min_x = fold_min(elements.iter().map(|el| el.x));
            each(elements, |_| ElementPatch::new().x(min_x))
        }
        AlignOp::Center => {
            let center = mean(elements.iter().map(|el| el.x + el.width / 2.0), elements.len());
            each(elements, |el| ElementPatch::new().x(center - el.width / 2.0))
        }
        AlignOp::Right => {
            let max_x = fold_max(elements.iter().map(|el| el.x + el.width));
            each(elements, |el| ElementPatch::new().x(max_x - el.width))
        }
        AlignOp::Top => {
            let min_y = fold_min(elements.iter().map(|el| el.y));
            each(elements, |_| ElementPatch::new().y(min_y))
        }
        AlignOp::Middle => {
            let middle = mean(elements.iter().map(|el| el.y + el.height / 2.0), elements.len());
            each(elements, |el| ElementPatch::new().y(middle - el.height / 2.0))
        }
        AlignOp::Bottom => {
            let max_y = fold_max(elements.iter().map(|el| el.y + el.height));
            each(elements, |el| ElementPatch::new().y(max_y - el.height))
        }
        AlignOp::DistributeHorizontally => distribute(elements, |el| (el.x, el.width), |p, x| p.x(x)),
        AlignOp::DistributeVertically => distribute(elements, |el| (el.y, el.height), |p, y| p.y(y)),
        AlignOp::MatchWidth => {
            let width = elements[0].width;
            elements[1..]
                .iter()
                .map(|el| (el.id.clone(), ElementPatch::new().width(width)))
                .collect()
        }
        AlignOp::MatchHeight => {
            let height = elements[0].height;
            elements[1..]
                .iter()
                .map(|el| (el.id.clone(), ElementPatch::new().height(height)))
                .collect()
        }
    }
}

fn each(elements: &[&Element], f: impl Fn(&Element) -> ElementPatch) -> Batch {
    elements.iter().map(|el| (el.id.clone(), f(el))).collect()
}

/// Equal gaps between neighbours, first and last stay put
fn distribute(
    elements: &[&Element],
    span: impl Fn(&Element) -> (f64, f64),
    set: impl Fn(ElementPatch, f64) -> ElementPatch,
) -> Batch {
    let mut sorted: Vec<&Element> = elements.to_vec();
    sorted.sort_by(|a, b| span(a).0.total_cmp(&span(b).0));

    let (start, _) = span(sorted[0]);
    let (last_start, last_size) = span(sorted[sorted.len() - 1]);
    let total = last_start + last_size - start;
    let occupied: f64 = sorted.iter().map(|el| span(el).1).sum();
    let gap = (total - occupied) / (sorted.len() - 1) as f64;

    let mut cursor = start;
    sorted
        .into_iter()
        .map(|el| {
            let patch = set(ElementPatch::new(), cursor);
            cursor += span(el).1 + gap;
            (el.id.clone(), patch)
        })
        .collect()
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use weave_model::ElementKind;

    fn block(id: &str, x: f64, y: f64, width: f64, height: f64) -> Element {
        let mut el = Element::new(id.into(), ElementKind::Container, x, y);
        el.width = width;
        el.height = height;
        el
    }

    fn xs(batch: &Batch) -> Vec<(String, f64)> {
        batch
            .iter()
            .map(|(id, patch)| (id.to_string(), patch.x.unwrap_or(f64::NAN)))
            .collect()
    }

    #[test]
    fn test_align_left_and_right() {
        let a = block("a", 10.0, 0.0, 100.0, 10.0);
        let b = block("b", 50.0, 0.0, 20.0, 10.0);

        assert_eq!(
            xs(&plan(AlignOp::Left, &[&a, &b])),
            vec![("a".to_string(), 10.0), ("b".to_string(), 10.0)]
        );
        assert_eq!(
            xs(&plan(AlignOp::Right, &[&a, &b])),
            vec![("a".to_string(), 10.0), ("b".to_string(), 90.0)]
        );
    }

    #[test]
    fn test_align_center_uses_mean_center() {
        let a = block("a", 0.0, 0.0, 100.0, 10.0);
        let b = block("b", 100.0, 0.0, 50.0, 10.0);

        // centers 50 and 125, mean 87.5
        assert_eq!(
            xs(&plan(AlignOp::Center, &[&a, &b])),
            vec![("a".to_string(), 37.5), ("b".to_string(), 62.5)]
        );
    }

    #[test]
    fn test_distribute_horizontally_equalizes_gaps() {
        let a = block("a", 0.0, 0.0, 10.0, 10.0);
        let b = block("b", 15.0, 0.0, 20.0, 10.0);
        let c = block("c", 90.0, 0.0, 10.0, 10.0);

        // span 0..100, occupied 40, two gaps of 30
        assert_eq!(
            xs(&plan(AlignOp::DistributeHorizontally, &[&c, &a, &b])),
            vec![
                ("a".to_string(), 0.0),
                ("b".to_string(), 40.0),
                ("c".to_string(), 90.0)
            ]
        );
    }

    #[test]
    fn test_match_width_skips_the_reference() {
        let a = block("a", 0.0, 0.0, 300.0, 10.0);
        let b = block("b", 0.0, 0.0, 20.0, 10.0);

        let batch = plan(AlignOp::MatchWidth, &[&a, &b]);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, ElementId::from("b"));
        assert_eq!(batch[0].1.width, Some(300.0));
    }

    #[test]
    fn test_single_element_plans_nothing() {
        let a = block("a", 0.0, 0.0, 10.0, 10.0);
        assert!(plan(AlignOp::Bottom, &[&a]).is_empty());
    }
}
