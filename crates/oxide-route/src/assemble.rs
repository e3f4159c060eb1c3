//! Path assembly, the inverse of [`parse`](crate::parse).

use tracing::debug;

use crate::error::{Result, RouteError};
use crate::expr::{Alternative, Capture, Expr, Fragments};
use crate::value::Value;

/// Builds the path that `route` matches for `data`.
///
/// Segments are joined with `/` without a leading or trailing slash. Optional
/// parts whose data is absent (`null`, `false`, `0`, `""` or a missing key) are
/// left out.
///
/// # Errors
///
/// Returns an error when `data` does not fit the shape of `route`: a required
/// capture or alternative without a value, a selection naming an unknown
/// branch, or no data at all for fragments that contain captures or
/// alternatives.
///
/// # Example
///
/// ```
/// use oxide_route::{assemble, param, route, ResultMap, Value};
///
/// let route = route!["static", param("myParam")];
/// let data = ResultMap::from([("myParam".to_string(), Value::from("hello"))]);
/// assert_eq!(assemble(&route, &data.into()).unwrap(), "static/hello");
/// ```
pub fn assemble(route: &Fragments, data: &Value) -> Result<String> {
    let mut segments = Vec::new();
    assemble_fragments(route, data, &mut segments).inspect_err(|err| {
        debug!(error = %err, "route assembly failed");
    })?;
    Ok(segments.join("/"))
}

fn assemble_expr(expr: &Expr, data: &Value, out: &mut Vec<String>) -> Result<()> {
    match expr {
        Expr::Static(literal) => {
            out.push(literal.clone());
            Ok(())
        }
        Expr::Capture(capture) => assemble_capture(capture, data, out),
        Expr::Alternative(alternative) => assemble_alternative(alternative, data, out),
        Expr::Fragments(fragments) => assemble_fragments(fragments, data, out),
    }
}

fn assemble_capture(capture: &Capture, data: &Value, out: &mut Vec<String>) -> Result<()> {
    if !data.is_truthy() {
        if capture.is_optional() {
            return Ok(());
        }
        return Err(RouteError::MissingSubstitution(capture.ref_name().to_string()));
    }

    let value = match data {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => return Err(RouteError::InvalidSubstitution(capture.ref_name().to_string())),
    };
    out.extend(capture.leading_name().map(String::from));
    out.push(value);
    Ok(())
}

fn assemble_alternative(
    alternative: &Alternative,
    data: &Value,
    out: &mut Vec<String>,
) -> Result<()> {
    let ref_name = alternative.ref_name();
    if !data.is_truthy() {
        if alternative.is_optional() {
            return Ok(());
        }
        return Err(RouteError::MissingOption(ref_name.to_string()));
    }

    let (result, branch_data) = match data {
        Value::Choice(choice) => (choice.result.as_str(), choice.data.as_ref()),
        Value::Map(_) => match data.get("result") {
            Value::String(result) => (result.as_str(), data.get("data")),
            _ => return Err(RouteError::InvalidOption(ref_name.to_string())),
        },
        _ => return Err(RouteError::InvalidOption(ref_name.to_string())),
    };

    let branch = alternative
        .get(result)
        .ok_or_else(|| RouteError::UnknownAlternative {
            ref_name: ref_name.to_string(),
            result: result.to_string(),
        })?;

    // Parsing leaves a named branch's result under its ref name in the branch
    // data. A capture branch also takes a bare value.
    let branch_data = match (branch.ref_name(), branch_data) {
        (Some(name), Value::Map(_)) => branch_data.get(name),
        _ => branch_data,
    };
    assemble_expr(branch, branch_data, out)
}

fn assemble_fragments(fragments: &Fragments, data: &Value, out: &mut Vec<String>) -> Result<()> {
    if !data.is_truthy() && fragments.is_optional() {
        return Ok(());
    }

    for child in fragments.fragments() {
        if let Expr::Static(literal) = child {
            out.push(literal.clone());
            continue;
        }
        if !data.is_truthy() {
            return Err(RouteError::MissingFragmentData);
        }
        // Unnamed required fragments read from the same map as their parent
        // rather than from an empty one, mirroring how parse merges their keys
        // into the parent's result. Handing them an empty map would break the
        // round trip for any capture or alternative inside them.
        let child_data = child.ref_name().map_or(data, |name| data.get(name));
        assemble_expr(child, child_data, out)?;
    }
    Ok(())
}
