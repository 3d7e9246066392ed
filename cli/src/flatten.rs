use crate::commands::FlattenCmd;
use crate::parser::{Curve, ParseError};
use polyflat::flatten::{self as flattening, FlattenOptions};
use polyflat::geom::{from_scalar_point, Coordinate, Point};
use std::fmt::Display;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlattenError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Flatten(#[from] flattening::FlattenError),
}

pub fn flatten(mut cmd: FlattenCmd) -> Result<(), FlattenError> {
    let polylines = if cmd.integer {
        format_polylines(flatten_curves::<i64>(&cmd.curves, &cmd.options)?)
    } else {
        format_polylines(flatten_curves::<f64>(&cmd.curves, &cmd.options)?)
    };

    if cmd.count {
        let num_vertices: usize = polylines.iter().map(|polyline| polyline.len()).sum();
        writeln!(&mut *cmd.output, "curves: {}", polylines.len())?;
        writeln!(&mut *cmd.output, "vertices: {}", num_vertices)?;

        return Ok(());
    }

    for polyline in &polylines {
        let mut cmd_name = "M";
        for (x, y) in polyline {
            write!(&mut *cmd.output, "{} {} {} ", cmd_name, x, y)?;
            cmd_name = "L";
        }
        writeln!(&mut *cmd.output)?;
    }

    Ok(())
}

fn flatten_curves<T: Coordinate>(
    curves: &[Curve],
    options: &FlattenOptions,
) -> Result<Vec<Vec<Point<T>>>, flattening::FlattenError> {
    let mut polylines = Vec::with_capacity(curves.len());
    let p = |position: Point<f64>| -> Point<T> { from_scalar_point(position) };

    for curve in curves {
        let polyline = match *curve {
            Curve::Quadratic(c) => {
                flattening::try_flatten_quadratic(p(c.from), p(c.ctrl), p(c.to), options)?
            }
            Curve::Cubic(c) => flattening::try_flatten_cubic(
                p(c.from),
                p(c.ctrl1),
                p(c.ctrl2),
                p(c.to),
                options,
            )?,
        };
        log::info!("{:?} -> {} vertices", curve, polyline.len());
        polylines.push(polyline);
    }

    Ok(polylines)
}

fn format_polylines<T: Display>(polylines: Vec<Vec<Point<T>>>) -> Vec<Vec<(String, String)>> {
    polylines
        .into_iter()
        .map(|polyline| {
            polyline
                .into_iter()
                .map(|p| (p.x.to_string(), p.y.to_string()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
fn run(input: &str, options: FlattenOptions, integer: bool, count: bool) -> String {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = SharedBuffer::default();
    let cmd = FlattenCmd {
        curves: crate::parser::parse_curves(input).unwrap(),
        output: Box::new(buffer.clone()),
        options,
        integer,
        count,
    };
    flatten(cmd).unwrap();

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn flatten_to_path_commands() {
    let output = run("Q 0 0 5 1 10 0\nC 0 0 3 0 7 0 10 0", FlattenOptions::DEFAULT, false, false);
    assert_eq!(output, "M 0 0 L 5 0.5 L 10 0 \nM 0 0 L 10 0 \n");
}

#[test]
fn flatten_in_integer_coordinates() {
    let output = run("Q 0 0 5 1 10 0", FlattenOptions::DEFAULT, true, false);
    assert_eq!(output, "M 0 0 L 5 1 L 10 0 \n");
}

#[test]
fn count_vertices() {
    let output = run(
        "C 0 0 0 100 100 100 100 0\nQ 0 0 5 0 10 0",
        FlattenOptions::DEFAULT,
        false,
        true,
    );
    assert_eq!(output, "curves: 2\nvertices: 20\n");
}

#[test]
fn invalid_options_are_reported() {
    let cmd = FlattenCmd {
        curves: crate::parser::parse_curves("Q 0 0 5 1 10 0").unwrap(),
        output: Box::new(io::sink()),
        options: FlattenOptions::scale(0.0),
        integer: false,
        count: false,
    };

    let err = flatten(cmd).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported parameter: Approximation scale must be positive, got 0"
    );
}
