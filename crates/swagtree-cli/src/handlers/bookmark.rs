use std::io::Write;

use log::info;

use crate::render;
use crate::state::AppState;
use crate::BookmarkCommand;

/// Handle `swagtree bookmark ...`
pub fn handle_bookmark(
    state: &mut AppState,
    command: BookmarkCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        BookmarkCommand::Save { name, spec, filter } => {
            state.open(&spec)?;
            let tree = match filter.as_deref() {
                Some(text) => state.session.filter(text),
                None => state.session.tree().clone(),
            };
            let path = state.store.save(&name, &tree)?;
            writeln!(out, "{}", path.display())?;
        }
        BookmarkCommand::Show { name } => {
            let tree = state.store.load(&name)?;
            out.write_all(render::outline(&tree).as_bytes())?;
        }
        BookmarkCommand::List => {
            for name in state.store.list() {
                writeln!(out, "{}", name)?;
            }
        }
        BookmarkCommand::Remove { name } => {
            state.store.remove(&name)?;
            info!("removed bookmark `{}`", name);
        }
    }
    Ok(())
}
