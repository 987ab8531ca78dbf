/// Reader for wireframes written as a subset of Wavefront OBJ
///
/// Supported statements: `v x y z [w]`, `l a b [c ...]` and `f a b c ...`.
/// Indices are 1-based and may carry `/vt/vn` suffixes, which are ignored.
/// Everything after `#` is a comment; unknown statements are skipped.
use nalgebra::Vector3;
use nom::{
    bytes::complete::{take_till1, take_while},
    character::complete::{char, digit1, space0, space1},
    combinator::{map, map_res, opt},
    multi::many1,
    number::complete::double,
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::error::{GeometryError, Result};
use crate::model::{build_model, WireframeModel};

#[derive(Debug, PartialEq)]
enum Statement {
    Vertex(Vector3<f64>),
    Polyline(Vec<usize>),
    Face(Vec<usize>),
    Other,
}

/// Read a wireframe model from OBJ-style text.
pub fn read_wireframe(input: &str) -> Result<WireframeModel> {
    let mut nodes = Vec::new();
    let mut links = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line_no = number + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let statement = match parse_statement(line) {
            Ok((rest, statement)) if rest.trim().is_empty() => statement,
            Ok((rest, _)) => {
                return Err(GeometryError::Parse {
                    line: line_no,
                    message: format!("unexpected trailing input '{}'", rest.trim()),
                })
            }
            Err(_) => {
                return Err(GeometryError::Parse {
                    line: line_no,
                    message: format!("malformed statement '{}'", line),
                })
            }
        };

        match statement {
            Statement::Vertex(v) => {
                if !v.iter().all(|c| c.is_finite()) {
                    return Err(GeometryError::Parse {
                        line: line_no,
                        message: "vertex coordinates must be finite".to_string(),
                    });
                }
                nodes.push(v);
            }
            Statement::Polyline(refs) => {
                require_refs(&refs, 2, "line", line_no)?;
                let refs = zero_based(&refs, line_no)?;
                links.extend(refs.windows(2).map(|w| (w[0], w[1])));
            }
            Statement::Face(refs) => {
                require_refs(&refs, 3, "face", line_no)?;
                let refs = zero_based(&refs, line_no)?;
                let next = refs.iter().cycle().skip(1);
                links.extend(refs.iter().zip(next).map(|(&a, &b)| (a, b)));
            }
            Statement::Other => {}
        }
    }

    log::debug!("read {} nodes and {} links", nodes.len(), links.len());
    build_model(nodes, links)
}

fn require_refs(refs: &[usize], min: usize, what: &str, line: usize) -> Result<()> {
    if refs.len() < min {
        return Err(GeometryError::Parse {
            line,
            message: format!("{what} needs at least {min} vertex references, got {}", refs.len()),
        });
    }
    Ok(())
}

fn zero_based(refs: &[usize], line: usize) -> Result<Vec<usize>> {
    refs.iter()
        .map(|&index| {
            index.checked_sub(1).ok_or_else(|| GeometryError::Parse {
                line,
                message: "vertex indices start at 1".to_string(),
            })
        })
        .collect()
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    let (input, keyword) = preceded(space0, take_till1(|c: char| c.is_whitespace()))(input)?;
    match keyword {
        "v" => map(
            tuple((coordinate, coordinate, coordinate, opt(coordinate))),
            |(x, y, z, _w)| Statement::Vertex(Vector3::new(x, y, z)),
        )(input),
        "l" => map(many1(preceded(space1, vertex_ref)), Statement::Polyline)(input),
        "f" => map(many1(preceded(space1, vertex_ref)), Statement::Face)(input),
        _ => Ok(("", Statement::Other)),
    }
}

fn coordinate(input: &str) -> IResult<&str, f64> {
    preceded(space1, double)(input)
}

fn vertex_ref(input: &str) -> IResult<&str, usize> {
    terminated(
        map_res(digit1, str::parse::<usize>),
        opt(preceded(
            char('/'),
            take_while(|c: char| c.is_ascii_digit() || c == '/'),
        )),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    const TRIANGLE: &str = "\
# a triangle
v 0 0 0
v 1 0 0
v 0 0 1.5

l 1 2 3
";

    #[test]
    fn test_parse_vertex() {
        let (rest, statement) = parse_statement("v 1.5 -2 3e2").unwrap();
        assert_eq!(rest, "");
        assert_eq!(statement, Statement::Vertex(Vector3::new(1.5, -2.0, 300.0)));
    }

    #[test]
    fn test_vertex_ref_suffixes() {
        assert_eq!(vertex_ref("7/2/3"), Ok(("", 7)));
        assert_eq!(vertex_ref("4//9"), Ok(("", 4)));
        assert_eq!(vertex_ref("12"), Ok(("", 12)));
    }

    #[test]
    fn test_polyline() {
        let model = read_wireframe(TRIANGLE).unwrap();
        assert_eq!(model.node_count(), 3);
        assert_eq!(model.links(), &[Link::new(0, 1), Link::new(1, 2)]);
        assert_eq!(model.nodes()[2], Vector3::new(0.0, 0.0, 1.5));
    }

    #[test]
    fn test_face_closes_loop() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1/1 2/2 3/3 # comment\n";
        let model = read_wireframe(text).unwrap();
        assert_eq!(
            model.links(),
            &[Link::new(0, 1), Link::new(1, 2), Link::new(2, 0)]
        );
    }

    #[test]
    fn test_unknown_statements_skipped() {
        let text = "o thing\nvn 0 0 1\nv 0 0 0\nv 1 1 1\ng group\nl 1 2\n";
        let model = read_wireframe(text).unwrap();
        assert_eq!(model.node_count(), 2);
        assert_eq!(model.links().len(), 1);
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = read_wireframe("v 0 0 0\nl 0 1\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_malformed_vertex() {
        let err = read_wireframe("v 1 2\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 1, .. }));

        let err = read_wireframe("v 1 2 3 4 5\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_single_vertex_line_rejected() {
        let err = read_wireframe("v 0 0 0\nv 1 0 0\nl 1\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_two_vertex_face_rejected() {
        let err = read_wireframe("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let err = read_wireframe("v 0 0 0\nv nan 0 0\nl 1 2\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 2, .. }));

        let err = read_wireframe("v inf 0 0\n").unwrap_err();
        assert!(matches!(err, GeometryError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_out_of_range_reference() {
        let err = read_wireframe("v 0 0 0\nv 1 0 0\nl 1 3\n").unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidLinkIndex {
                from: 0,
                to: 2,
                node_count: 2,
                ..
            }
        ));
    }
}
