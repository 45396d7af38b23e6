use anyhow::Result;
use loupe_diagnostics::{Diagnostic, Marker, Report};
use loupe_span::position::Position;
use unindent::unindent;

fn main() -> Result<()> {
    let mut diagnostic = Diagnostic::new();

    let file = diagnostic.add_file(
        "test.zc",
        unindent(
            "
            let id<a>(x : a) : a := x + 1
            rec fix(f) := f(fix(f))
            let const<a, b>(x : a, y : b) : a := x
            ",
        )
        .trim_end(),
    );

    let report = Report::error()
        .with_message("Could not deduce constraint 'Num(a)' from the current context")
        .with_marker(
            Position::new(file, 1, 25, 1, 30),
            Marker::primary("While applying function '+'"),
        )
        .with_marker(
            Position::new(file, 1, 11, 1, 16),
            Marker::context("'x' is supposed to have type 'a'"),
        )
        .with_marker(
            Position::new(file, 1, 8, 1, 9),
            Marker::context("type 'a' is bound here without constraints"),
        )
        .with_hint("Adding 'Num(a)' to the list of constraints may solve this problem.");

    let multi = Report::warning()
        .with_message("Recursive binding may never terminate")
        .with_marker(
            Position::new(file, 2, 5, 3, 10),
            Marker::primary("the fixpoint is introduced across these lines"),
        )
        .with_marker(Position::new(file, 2, 1, 2, 4), Marker::suggestion("consider 'let' here"));

    let diagnostic = diagnostic.with_report(report).with_report(multi);
    diagnostic.print_stderr(true)?;

    Ok(())
}
