//! Single entry point tying pattern loading, walking, and persistence together

use crate::error::TreeError;
use crate::output::write_rendered;
use crate::patterns::{GITIGNORE_FILE, IgnoreRuleSet};
use crate::tree::{RenderedTree, TraversalConfig, TreeWalker};

/// A rendered tree plus any non-fatal notices raised while producing it.
#[derive(Debug)]
pub struct RenderOutcome {
    pub tree: RenderedTree,
    pub notices: Vec<TreeError>,
}

impl RenderOutcome {
    /// True when the configured output file could not be written.
    pub fn write_failed(&self) -> bool {
        self.notices
            .iter()
            .any(|n| matches!(n, TreeError::OutputWriteFailed { .. }))
    }
}

/// Render the tree described by `config`.
///
/// Fails only when the root is missing or unreadable. An invalid depth and a
/// failed output write are reported through `RenderOutcome::notices`.
pub fn render_tree(config: &TraversalConfig) -> Result<RenderOutcome, TreeError> {
    let root = config.root();
    let mut notices = Vec::new();
    let (_, depth_notice) = config.effective_max_depth();
    if let Some(notice) = depth_notice {
        log::warn!("{}", notice);
        notices.push(notice);
    }

    let rules = if config.use_gitignore {
        IgnoreRuleSet::load(&root.join(GITIGNORE_FILE))
    } else {
        IgnoreRuleSet::default()
    };

    let tree = TreeWalker::new(config).with_rules(rules).walk(root)?;
    log::debug!(
        "rendered {} directories, {} files from {}",
        tree.dir_count(),
        tree.file_count(),
        root.display()
    );

    if let Some(path) = &config.output_path {
        if let Err(source) = write_rendered(path, &tree.text(), config.encoding) {
            let notice = TreeError::OutputWriteFailed {
                path: path.clone(),
                source,
            };
            log::warn!("{}", notice);
            notices.push(notice);
        }
    }

    Ok(RenderOutcome { tree, notices })
}
