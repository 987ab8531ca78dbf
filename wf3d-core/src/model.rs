/// Wireframe model: nodes plus index links
use nalgebra::Vector3;

use crate::error::{GeometryError, Result};
use crate::projection::{ObliqueProjection, ProjectedModel};

/// An unordered pair of node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: usize,
    pub b: usize,
}

impl Link {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

impl From<(usize, usize)> for Link {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// A set of 3D nodes and the links between them.
///
/// Every link is validated at construction, so rendering never sees an
/// out-of-range index. Links are kept as given: duplicates, self-links and
/// coincident nodes are all allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeModel {
    nodes: Vec<Vector3<f64>>,
    links: Vec<Link>,
}

impl WireframeModel {
    /// Same as [`build_model`].
    pub fn new<L>(nodes: Vec<Vector3<f64>>, links: L) -> Result<Self>
    where
        L: IntoIterator<Item = (usize, usize)>,
    {
        build_model(nodes, links)
    }

    /// The 8 corners of {0,1}³ joined by the 12 cube edges.
    pub fn unit_cube() -> Self {
        let nodes = (0..8)
            .map(|i| {
                Vector3::new(
                    (i & 1) as f64,
                    ((i >> 1) & 1) as f64,
                    ((i >> 2) & 1) as f64,
                )
            })
            .collect();

        // Corners differing in exactly one bit share an edge.
        let mut links = Vec::with_capacity(12);
        for i in 0..8usize {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    links.push(Link::new(i, i | bit));
                }
            }
        }

        Self { nodes, links }
    }

    pub fn nodes(&self) -> &[Vector3<f64>] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Project every node with the fixed cabinet projection.
    pub fn project(&self) -> ProjectedModel {
        self.project_with(&ObliqueProjection::cabinet())
    }

    /// Project every node with an arbitrary oblique projection.
    pub fn project_with(&self, projection: &ObliqueProjection) -> ProjectedModel {
        ProjectedModel::new(self.nodes.iter().map(|n| projection.apply(n)).collect())
    }
}

/// Build a wireframe model, rejecting links that reference missing nodes.
pub fn build_model<L>(nodes: Vec<Vector3<f64>>, links: L) -> Result<WireframeModel>
where
    L: IntoIterator<Item = (usize, usize)>,
{
    let node_count = nodes.len();
    let links = links
        .into_iter()
        .map(Link::from)
        .enumerate()
        .map(|(index, link)| {
            if link.a < node_count && link.b < node_count {
                Ok(link)
            } else {
                Err(GeometryError::InvalidLinkIndex {
                    link: index,
                    from: link.a,
                    to: link.b,
                    node_count,
                })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "built wireframe model with {} nodes and {} links",
        node_count,
        links.len()
    );

    Ok(WireframeModel { nodes, links })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_valid_model() {
        let model = build_model(square(), [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert_eq!(model.node_count(), 4);
        assert_eq!(model.links().len(), 4);
        assert_eq!(model.links()[3], Link::new(3, 0));
    }

    #[test]
    fn test_out_of_range_link() {
        let err = build_model(square(), [(0, 1), (0, 4)]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidLinkIndex {
                link: 1,
                from: 0,
                to: 4,
                node_count: 4,
            }
        );
    }

    #[test]
    fn test_first_endpoint_out_of_range() {
        let err = build_model(square(), [(9, 0)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidLinkIndex { from: 9, .. }));
    }

    #[test]
    fn test_links_on_empty_model() {
        let err = build_model(Vec::new(), [(0, 0)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidLinkIndex { node_count: 0, .. }));
    }

    #[test]
    fn test_degenerate_links_allowed() {
        let nodes = vec![Vector3::zeros(), Vector3::zeros()];
        let model = build_model(nodes, [(0, 0), (0, 1), (0, 1)]).unwrap();
        assert_eq!(model.links().len(), 3);
    }

    #[test]
    fn test_unit_cube() {
        let cube = WireframeModel::unit_cube();
        assert_eq!(cube.node_count(), 8);
        assert_eq!(cube.links().len(), 12);
        for link in cube.links() {
            let d = cube.nodes()[link.a] - cube.nodes()[link.b];
            assert_eq!(d.norm(), 1.0);
        }
        assert_eq!(cube.nodes()[7], Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_projection_preserves_order() {
        let model = build_model(square(), Vec::new()).unwrap();
        let projected = model.project();
        assert_eq!(projected.len(), 4);
        assert_eq!(projected.points()[1], nalgebra::Vector2::new(1.0, 0.0));
        assert_eq!(projected.points()[3], nalgebra::Vector2::new(0.0, 1.0));
    }
}
