//! `convdiff interactive`: prompt for a velocity and a scheme, then solve
//!
//! Invalid answers are asked again; the engine itself never prompts or
//! retries.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use convdiff_rs::physics::DomainParameters;
use convdiff_rs::schemes::Scheme;
use convdiff_rs::solver::{Scenario, Solver, SteadyStateSolver};

use super::PlotFormat;

/// Arguments of `convdiff interactive`
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Output directory
    #[arg(short, long, default_value = "Plots")]
    pub output: PathBuf,

    /// Plot format
    #[arg(long, value_enum, default_value = "png")]
    pub format: PlotFormat,
}

/// Ask `question` until `parse` accepts the answer
///
/// The hint returned by `parse` is printed before asking again. Fails with
/// [`io::ErrorKind::UnexpectedEof`] when the input ends first.
pub fn prompt_until<T, R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before a valid answer"));
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(hint) => writeln!(output, "{hint}")?,
        }
    }
}

/// Accept any finite number
pub fn parse_velocity(answer: &str) -> Result<f64, String> {
    match answer.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("'{answer}' is not a number.")),
    }
}

/// Accept an exact scheme acronym
pub fn parse_scheme(answer: &str) -> Result<Scheme, String> {
    answer.parse::<Scheme>().map_err(|e| e.to_string())
}

/// Velocity then scheme, asked on `output` and read from `input`
pub fn ask_run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<(f64, Scheme)> {
    let velocity = prompt_until(
        input,
        output,
        "What fluid velocity would you like to test? Please enter a number.",
        parse_velocity,
    )?;
    writeln!(output, "The constant fluid velocity in the domain has been set to {velocity} m/s")?;

    let scheme = prompt_until(
        input,
        output,
        "Please choose a discretization scheme. Type one of the following options:\n\tCDS\n\tUDS\n\tPLDS",
        parse_scheme,
    )?;
    writeln!(
        output,
        "You have chosen to discretize the convection term with the {}",
        scheme.description()
    )?;

    Ok((velocity, scheme))
}

/// Run `convdiff interactive`
pub fn execute(args: InteractiveArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let (velocity, scheme) = match ask_run(&mut stdin.lock(), &mut stdout) {
        Ok(answers) => answers,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => bail!("no answer given, aborting"),
        Err(e) => return Err(e.into()),
    };

    let scenario = Scenario::new(DomainParameters::default().velocity(velocity), scheme)?;
    let record = SteadyStateSolver::new().solve(&scenario)?;

    let dir = args.output.join(scheme.acronym());
    println!("Saving plot of the φ distribution to {}", dir.display());
    let plot = super::write_record(&record, &dir, args.format)?;

    super::report(&record, &mut stdout.lock())?;
    println!("Plot saved to {}", plot.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_retries_until_valid_velocity() {
        let mut input = Cursor::new("fast\n\n2.5\n");
        let mut output = Vec::new();

        let velocity = prompt_until(&mut input, &mut output, "Velocity?", parse_velocity).unwrap();
        assert_eq!(velocity, 2.5);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Velocity?").count(), 3);
        assert!(text.contains("'fast' is not a number."));
    }

    #[test]
    fn test_integer_and_negative_velocities() {
        assert_eq!(parse_velocity("3"), Ok(3.0));
        assert_eq!(parse_velocity("-1.5"), Ok(-1.5));
        assert!(parse_velocity("inf").is_err());
        assert!(parse_velocity("NaN").is_err());
    }

    #[test]
    fn test_scheme_must_match_exactly() {
        assert_eq!(parse_scheme("PLDS"), Ok(Scheme::Plds));
        assert!(parse_scheme("plds").is_err());
    }

    #[test]
    fn test_full_prompt_flow() {
        let mut input = Cursor::new("1\nquick\nUDS\n");
        let mut output = Vec::new();

        let (velocity, scheme) = ask_run(&mut input, &mut output).unwrap();
        assert_eq!(velocity, 1.0);
        assert_eq!(scheme, Scheme::Uds);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("invalid scheme `quick`"));
        assert!(text.contains("Upwind Differencing Scheme"));
    }

    #[test]
    fn test_closed_input_is_eof() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();

        let err = prompt_until(&mut input, &mut output, "Velocity?", parse_velocity).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
