use std::io::Write;

use log::debug;
use swagtree_core::codec;

use crate::render;
use crate::state::AppState;
use crate::TreeArgs;

/// Handle `swagtree tree`
pub fn handle_tree(state: &mut AppState, args: TreeArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    state.open(&args.spec)?;

    let view = match args.filter.as_deref() {
        Some(text) => state.session.filter(text),
        None => state.session.tree().clone(),
    };
    debug!("printing {} nodes", view.len());

    if args.json {
        out.write_all(&codec::encode(&view)?)?;
        writeln!(out)?;
    } else {
        out.write_all(render::outline(&view).as_bytes())?;
    }
    Ok(())
}
