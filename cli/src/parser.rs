use polyflat::geom::{point, CubicBezierSegment, Point, QuadraticBezierSegment};
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number {
        src: String,
        line: usize,
        column: usize,
    },
    #[error("Line {line} Column {column}: Invalid command {src:?}.")]
    Command {
        src: String,
        line: usize,
        column: usize,
    },
    #[error("Line {line}: Command {command:?} expects {expected} numbers, got {got}.")]
    ArgumentCount {
        command: char,
        expected: usize,
        got: usize,
        line: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curve {
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
}

/// Parses one curve per line.
///
/// ```text
/// # Comment.
/// Q x1 y1 x2 y2 x3 y3
/// C x1 y1 x2 y2 x3 y3 x4 y4
/// ```
///
/// Several curves can share a line when separated with `;`. Line and column
/// numbers in errors start at one.
pub fn parse_curves(src: &str) -> Result<Vec<Curve>, ParseError> {
    let mut curves = Vec::new();

    for (line_idx, line) in src.lines().enumerate() {
        let line_number = line_idx + 1;
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };

        let mut offset = 0;
        for statement in line.split(';') {
            if let Some(curve) = parse_statement(statement, line_number, offset)? {
                curves.push(curve);
            }
            offset += statement.chars().count() + 1;
        }
    }

    Ok(curves)
}

fn parse_statement(
    src: &str,
    line: usize,
    offset: usize,
) -> Result<Option<Curve>, ParseError> {
    let mut tokens = tokenize(src).into_iter();

    let (column, command) = match tokens.next() {
        Some(token) => token,
        None => return Ok(None),
    };

    let (command, expected) = match command {
        "Q" | "q" => ('Q', 6),
        "C" | "c" => ('C', 8),
        _ => {
            return Err(ParseError::Command {
                src: command.to_string(),
                line,
                column: offset + column,
            });
        }
    };

    let mut numbers = Vec::with_capacity(expected);
    for (column, token) in tokens {
        let value: f64 = token.parse().map_err(|_| ParseError::Number {
            src: token.to_string(),
            line,
            column: offset + column,
        })?;
        numbers.push(value);
    }

    if numbers.len() != expected {
        return Err(ParseError::ArgumentCount {
            command,
            expected,
            got: numbers.len(),
            line,
        });
    }

    let p = |i: usize| -> Point<f64> { point(numbers[i * 2], numbers[i * 2 + 1]) };

    Ok(Some(if command == 'Q' {
        Curve::Quadratic(QuadraticBezierSegment {
            from: p(0),
            ctrl: p(1),
            to: p(2),
        })
    } else {
        Curve::Cubic(CubicBezierSegment {
            from: p(0),
            ctrl1: p(1),
            ctrl2: p(2),
            to: p(3),
        })
    }))
}

// Splits on whitespace, keeping the one-based column of each token.
fn tokenize(src: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (column_idx, (byte_idx, c)) in src.char_indices().enumerate() {
        if c.is_whitespace() {
            if let Some((start_byte, start_column)) = start.take() {
                tokens.push((start_column, &src[start_byte..byte_idx]));
            }
        } else if start.is_none() {
            start = Some((byte_idx, column_idx + 1));
        }
    }

    if let Some((start_byte, start_column)) = start {
        tokens.push((start_column, &src[start_byte..]));
    }

    tokens
}

#[test]
fn parse_quadratic_and_cubic() {
    let src = "# A comment\n\nQ 0 0 5 1 10 0\nC 0 0 0 100 100 100 100 0 # trailing comment\n";
    let curves = parse_curves(src).unwrap();

    assert_eq!(
        curves,
        vec![
            Curve::Quadratic(QuadraticBezierSegment {
                from: point(0.0, 0.0),
                ctrl: point(5.0, 1.0),
                to: point(10.0, 0.0),
            }),
            Curve::Cubic(CubicBezierSegment {
                from: point(0.0, 0.0),
                ctrl1: point(0.0, 100.0),
                ctrl2: point(100.0, 100.0),
                to: point(100.0, 0.0),
            }),
        ]
    );
}

#[test]
fn several_curves_on_one_line() {
    let curves = parse_curves("Q 0 0 1 1 2 0; q 2 0 3 -1 4 0").unwrap();
    assert_eq!(curves.len(), 2);
}

#[test]
fn parse_errors() {
    assert_eq!(
        parse_curves("Q 0 0 5 x 10 0"),
        Err(ParseError::Number {
            src: "x".to_string(),
            line: 1,
            column: 9,
        })
    );

    assert_eq!(
        parse_curves("Q 0 0 1 1 2 0\n  L 0 0 1 1"),
        Err(ParseError::Command {
            src: "L".to_string(),
            line: 2,
            column: 3,
        })
    );

    assert_eq!(
        parse_curves("C 0 0 1 1 2 0"),
        Err(ParseError::ArgumentCount {
            command: 'C',
            expected: 8,
            got: 6,
            line: 1,
        })
    );

    assert_eq!(
        ParseError::Command {
            src: "L".to_string(),
            line: 2,
            column: 3,
        }
        .to_string(),
        "Line 2 Column 3: Invalid command \"L\"."
    );
}
