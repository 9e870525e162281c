use expr_eval::{evaluate, Bindings, Error, Value};
use log::{debug, error, info};

type DynResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const USAGE: &str = "usage: expr-eval <expression> [name=value ...]";

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next() else {
        return Err(USAGE.into());
    };
    debug!("{:?}", source);

    let bindings = args
        .map(|arg| parse_binding(&arg))
        .collect::<DynResult<Bindings>>()?;
    info!("Evaluating with {} binding(s)", bindings.len());

    match evaluate(&source, &bindings) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err) => {
            report(&source, &err);
            Err(Box::new(err))
        }
    }
}

// `name=value`, where the value is itself an expression: `n=5`, `s='x'`.
fn parse_binding(arg: &str) -> DynResult<(String, Value)> {
    let Some((name, value_source)) = arg.split_once('=') else {
        return Err(format!("binding `{}` is not in the form name=value", arg).into());
    };
    let name = name.trim_start_matches('$');
    let value = evaluate(value_source, &Bindings::new())
        .map_err(|e| format!("binding `{}`: {}", name, e))?;
    debug!("${} = {}", name, value);
    Ok((name.to_string(), value))
}

fn report(source: &str, err: &Error) {
    let span = match err {
        Error::Lex(e) => Some(e.span()),
        Error::Parse(e) => e.span(),
        Error::Eval(_) => None,
    };
    match span {
        Some(span) => {
            let (row, col) = span.to_start_row_col(source);
            error!("{} (line {}, column {})", err, row, col);
        }
        None => error!("{}", err),
    }
}
