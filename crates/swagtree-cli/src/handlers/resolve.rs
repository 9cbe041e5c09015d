use std::collections::HashMap;
use std::io::Write;

use anyhow::Context;

use crate::render;
use crate::state::AppState;
use crate::ResolveArgs;

/// Handle `swagtree resolve`
pub fn handle_resolve(
    state: &mut AppState,
    args: ResolveArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    state.open(&args.spec)?;

    let leaf = state.session.find_operation(&args.path, &args.method)?;
    let values: HashMap<String, String> = args.params.into_iter().collect();

    if args.details {
        let operation = state.session.tree().get(leaf).and_then(|node| node.operation());
        if let Some(operation) = operation {
            let details = render::operation_details(&args.method.to_uppercase(), operation);
            out.write_all(details.as_bytes())?;
        }
    }

    let uri = state
        .session
        .request_uri(leaf, &values)
        .with_context(|| format!("resolving {} {}", args.method, args.path))?;
    writeln!(out, "{}", uri)?;
    Ok(())
}
