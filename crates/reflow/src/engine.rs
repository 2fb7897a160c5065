//! The reflow engine and its pristine-snapshot store.
//!
//! Each block moves through two states. The first time the engine sees a
//! block it records the block's nodes as a pristine snapshot; on every later
//! pass the block is restored from that snapshot before anything else
//! happens. Wrapping therefore always starts from the original rendering, so
//! repeated passes at the same width are byte-identical and a pass at the
//! original width reproduces the original lines.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::{ReflowError, Result};
use crate::prefix::PrefixGlyphs;
use crate::wrap::wrap_text_run;

/// Blocks that fit fewer cells per line than this are not re-wrapped.
pub const MIN_BLOCK_WIDTH: usize = 20;

/// Stable identity of a block across passes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
    /// Creates an identity from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One piece of a block's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Rendered text; re-wrapped line by line.
    Text(String),
    /// Anything else the block contains; passed through untouched.
    Markup(String),
}

/// A rendered block on the presentation surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The block's own identifier, if it has one.
    pub element_id: Option<String>,
    /// Current content, in document order.
    pub nodes: Vec<Node>,
    /// Rendered width of the block, in pixels.
    pub pixel_width: f64,
}

impl Block {
    /// Creates a block holding a single text node.
    #[must_use]
    pub fn text(element_id: Option<&str>, text: impl Into<String>, pixel_width: f64) -> Self {
        Self {
            element_id: element_id.map(str::to_string),
            nodes: vec![Node::Text(text.into())],
            pixel_width,
        }
    }

    /// Returns the block's identity given its position among all blocks.
    ///
    /// Blocks without an identifier are named `t{index}`.
    #[must_use]
    pub fn id(&self, index: usize) -> BlockId {
        match &self.element_id {
            Some(id) if !id.is_empty() => BlockId::new(id.as_str()),
            _ => BlockId(format!("t{index}")),
        }
    }

    /// Concatenates every text node.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Markup(_) => None,
            })
            .collect()
    }
}

/// Measures the rendered width of one character cell.
pub trait CellMetrics {
    /// Returns the width of one cell inside `block`, in pixels.
    fn cell_width(&self, block: &Block) -> f64;
}

/// Every block uses the same cell width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCellWidth(pub f64);

impl CellMetrics for FixedCellWidth {
    fn cell_width(&self, _block: &Block) -> f64 {
        self.0
    }
}

impl<F> CellMetrics for F
where
    F: Fn(&Block) -> f64,
{
    fn cell_width(&self, block: &Block) -> f64 {
        self(block)
    }
}

/// Computes how many cells per line a block may use.
///
/// One cell is held back from the measured capacity.
///
/// # Errors
///
/// Returns an error if either width is unusable or the result is below
/// [`MIN_BLOCK_WIDTH`].
///
/// # Examples
///
/// ```
/// use termgrid_reflow::max_line_width;
///
/// assert_eq!(max_line_width(400.0, 8.0).unwrap(), 49);
/// assert!(max_line_width(100.0, 8.0).is_err());
/// assert!(max_line_width(400.0, 0.0).is_err());
/// ```
pub fn max_line_width(block_width: f64, cell_width: f64) -> Result<usize> {
    if !cell_width.is_finite() || cell_width <= 0.0 {
        return Err(ReflowError::InvalidCellWidth { width: cell_width });
    }
    if !block_width.is_finite() {
        return Err(ReflowError::InvalidBlockWidth { width: block_width });
    }

    let cells = (block_width / cell_width).floor() as i64 - 1;
    match usize::try_from(cells) {
        Ok(cells) if cells >= MIN_BLOCK_WIDTH => Ok(cells),
        _ => Err(ReflowError::TooNarrow {
            cells,
            min: MIN_BLOCK_WIDTH,
        }),
    }
}

/// What a reflow pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReflowStats {
    /// Blocks that were restored and re-wrapped.
    pub wrapped: usize,
    /// Blocks that were restored but could not be measured.
    pub skipped: usize,
}

/// Re-wraps rendered blocks to their measured width.
///
/// The engine owns the snapshot store; dropping it forgets every block.
///
/// # Examples
///
/// ```
/// use termgrid_reflow::{Block, FixedCellWidth, ReflowEngine};
///
/// let original = "│ the quick brown fox jumps over the lazy dog";
/// let mut blocks = vec![Block::text(Some("bio"), original, 250.0)];
/// let mut engine = ReflowEngine::new();
///
/// engine.reflow(&mut blocks, &FixedCellWidth(10.0));
/// assert_eq!(
///     blocks[0].text_content(),
///     "│ the quick brown fox\n│ jumps over the lazy\n│ dog"
/// );
///
/// blocks[0].pixel_width = 1000.0;
/// engine.reflow(&mut blocks, &FixedCellWidth(10.0));
/// assert_eq!(blocks[0].text_content(), original);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReflowEngine {
    snapshots: HashMap<BlockId, Vec<Node>>,
    glyphs: PrefixGlyphs,
}

impl ReflowEngine {
    /// Creates an engine that recognizes light, heavy and double borders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom set of prefix glyphs.
    #[must_use]
    pub fn with_glyphs(glyphs: PrefixGlyphs) -> Self {
        Self {
            snapshots: HashMap::new(),
            glyphs,
        }
    }

    /// Runs one reflow pass over `blocks`.
    ///
    /// Every block is first restored from (or recorded as) its pristine
    /// snapshot. Blocks that cannot be measured stay restored but unwrapped.
    #[instrument(skip_all, fields(blocks = blocks.len()))]
    pub fn reflow<M>(&mut self, blocks: &mut [Block], metrics: &M) -> ReflowStats
    where
        M: CellMetrics + ?Sized,
    {
        let mut stats = ReflowStats::default();

        for (index, block) in blocks.iter_mut().enumerate() {
            let id = block.id(index);
            match self.snapshots.get(&id) {
                Some(pristine) => block.nodes.clone_from(pristine),
                None => {
                    trace!(%id, "recording pristine snapshot");
                    self.snapshots.insert(id.clone(), block.nodes.clone());
                }
            }

            let max_width = match max_line_width(block.pixel_width, metrics.cell_width(block)) {
                Ok(width) => width,
                Err(err) => {
                    debug!(%id, error = %err, "skipping block");
                    stats.skipped += 1;
                    continue;
                }
            };

            for node in &mut block.nodes {
                if let Node::Text(text) = node {
                    *text = wrap_text_run(text, max_width, &self.glyphs);
                }
            }
            stats.wrapped += 1;
        }

        debug!(wrapped = stats.wrapped, skipped = stats.skipped, "reflow pass done");
        stats
    }

    /// Returns the pristine snapshot recorded for a block.
    #[must_use]
    pub fn snapshot(&self, id: &BlockId) -> Option<&[Node]> {
        self.snapshots.get(id).map(Vec::as_slice)
    }

    /// Drops the snapshot of a removed block.
    ///
    /// Returns `true` if a snapshot was recorded for it.
    pub fn forget(&mut self, id: &BlockId) -> bool {
        self.snapshots.remove(id).is_some()
    }

    /// Keeps only the snapshots whose identity satisfies `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&BlockId) -> bool,
    {
        self.snapshots.retain(|id, _| keep(id));
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Returns the number of blocks with a recorded snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no block has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termgrid_protocol::CharSet;
    use termgrid_render::borders::draw_box;

    const CELL: FixedCellWidth = FixedCellWidth(10.0);

    fn boxed_block(id: Option<&str>, pixel_width: f64) -> Block {
        let lines = draw_box(
            &["one two three four five six seven eight nine ten"],
            48,
            &CharSet::LIGHT,
        );
        Block::text(id, lines.join("\n"), pixel_width)
    }

    fn content_lines(block: &Block) -> Vec<String> {
        block.text_content().split('\n').map(str::to_string).collect()
    }

    #[test]
    fn narrow_pass_wraps_inside_border() {
        let mut blocks = vec![boxed_block(Some("notes"), 250.0)];
        let mut engine = ReflowEngine::new();

        let stats = engine.reflow(&mut blocks, &CELL);
        assert_eq!(stats, ReflowStats { wrapped: 1, skipped: 0 });

        let lines = content_lines(&blocks[0]);
        assert_eq!(lines[1], "│one two three four");
        assert_eq!(lines[2], "│five six seven eight");
        assert_eq!(lines[3], "│nine ten│");
        assert!(lines[0].starts_with('┌'));
        assert!(lines[4].starts_with('└'));
    }

    #[test]
    fn repeated_passes_are_idempotent() {
        let mut once = vec![boxed_block(None, 250.0)];
        let mut engine = ReflowEngine::new();
        engine.reflow(&mut once, &CELL);
        let after_one = once.clone();

        engine.reflow(&mut once, &CELL);
        assert_eq!(once, after_one);
    }

    #[test]
    fn original_width_round_trips() {
        let pristine = boxed_block(Some("notes"), 510.0);
        let mut blocks = vec![pristine.clone()];
        let mut engine = ReflowEngine::new();

        blocks[0].pixel_width = 250.0;
        engine.reflow(&mut blocks, &CELL);
        assert_ne!(blocks[0].nodes, pristine.nodes);

        blocks[0].pixel_width = 510.0;
        engine.reflow(&mut blocks, &CELL);
        assert_eq!(blocks[0].nodes, pristine.nodes);
    }

    #[test]
    fn resizes_never_accumulate() {
        let mut engine = ReflowEngine::new();
        let mut blocks = vec![boxed_block(Some("a"), 250.0)];
        engine.reflow(&mut blocks, &CELL);
        let direct = blocks[0].nodes.clone();

        let mut blocks = vec![boxed_block(Some("b"), 300.0)];
        for width in [300.0, 220.0, 400.0, 250.0] {
            blocks[0].pixel_width = width;
            engine.reflow(&mut blocks, &CELL);
        }
        assert_eq!(blocks[0].nodes, direct);
    }

    #[test]
    fn unmeasurable_blocks_are_restored_and_skipped() {
        let pristine = boxed_block(Some("notes"), 250.0);
        let mut blocks = vec![pristine.clone()];
        let mut engine = ReflowEngine::new();
        engine.reflow(&mut blocks, &CELL);

        blocks[0].pixel_width = 150.0;
        let stats = engine.reflow(&mut blocks, &CELL);
        assert_eq!(stats, ReflowStats { wrapped: 0, skipped: 1 });
        assert_eq!(blocks[0].nodes, pristine.nodes);

        blocks[0].pixel_width = 250.0;
        let stats = engine.reflow(&mut blocks, &FixedCellWidth(f64::NAN));
        assert_eq!(stats.skipped, 1);
        let stats = engine.reflow(&mut blocks, &|_: &Block| 0.0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(blocks[0].nodes, pristine.nodes);
    }

    #[test]
    fn markup_nodes_pass_through() {
        let mut blocks = vec![Block {
            element_id: None,
            nodes: vec![
                Node::Markup("<b>".into()),
                Node::Text("│ alpha beta gamma delta epsilon zeta eta".into()),
                Node::Markup("</b>".into()),
            ],
            pixel_width: 250.0,
        }];
        ReflowEngine::new().reflow(&mut blocks, &CELL);

        assert_eq!(blocks[0].nodes[0], Node::Markup("<b>".into()));
        assert_eq!(blocks[0].nodes[2], Node::Markup("</b>".into()));
        assert_eq!(
            blocks[0].nodes[1],
            Node::Text("│ alpha beta gamma\n│ delta epsilon zeta\n│ eta".into())
        );
    }

    #[test]
    fn identity_falls_back_to_position() {
        let named = Block::text(Some("bio"), "x", 0.0);
        let unnamed = Block::text(None, "x", 0.0);
        let blank = Block::text(Some(""), "x", 0.0);
        assert_eq!(named.id(3).as_str(), "bio");
        assert_eq!(unnamed.id(3).as_str(), "t3");
        assert_eq!(blank.id(0).as_str(), "t0");
    }

    #[test]
    fn snapshot_store_lifecycle() {
        let mut engine = ReflowEngine::new();
        assert!(engine.is_empty());

        let mut blocks = vec![
            boxed_block(Some("keep"), 250.0),
            boxed_block(None, 250.0),
            boxed_block(Some("drop"), 250.0),
        ];
        engine.reflow(&mut blocks, &CELL);
        assert_eq!(engine.len(), 3);
        assert!(engine.snapshot(&BlockId::new("t1")).is_some());

        assert!(engine.forget(&BlockId::new("drop")));
        assert!(!engine.forget(&BlockId::new("drop")));

        engine.retain(|id| id.as_str() == "keep");
        assert_eq!(engine.len(), 1);
        assert!(engine.snapshot(&BlockId::new("keep")).is_some());

        engine.clear();
        assert!(engine.is_empty());
    }

    #[test]
    fn forgotten_blocks_get_a_fresh_snapshot() {
        let mut engine = ReflowEngine::new();
        let mut blocks = vec![Block::text(Some("x"), "old content", 250.0)];
        engine.reflow(&mut blocks, &CELL);

        blocks[0] = Block::text(Some("x"), "new content", 250.0);
        engine.reflow(&mut blocks, &CELL);
        assert_eq!(blocks[0].text_content(), "old content");

        engine.forget(&BlockId::new("x"));
        blocks[0] = Block::text(Some("x"), "new content", 250.0);
        engine.reflow(&mut blocks, &CELL);
        assert_eq!(blocks[0].text_content(), "new content");
    }

    #[test]
    fn max_line_width_boundaries() {
        assert_eq!(max_line_width(210.0, 10.0), Ok(20));
        assert_eq!(
            max_line_width(209.0, 10.0),
            Err(ReflowError::TooNarrow { cells: 19, min: 20 })
        );
        assert!(max_line_width(f64::INFINITY, 10.0).is_err());
        assert!(max_line_width(-50.0, 10.0).is_err());
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_text() -> impl Strategy<Value = String> {
        prop::collection::vec("[│ ]{0,3}[a-z]{1,7}( [a-z]{1,7}){0,12}", 1..6)
            .prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Two passes at the same width equal one pass.
        #[test]
        fn reflow_is_idempotent(text in arb_text(), width in 0.0f64..800.0) {
            let mut engine = ReflowEngine::new();
            let mut blocks = vec![Block::text(None, text, width)];
            engine.reflow(&mut blocks, &FixedCellWidth(8.0));
            let once = blocks.clone();
            engine.reflow(&mut blocks, &FixedCellWidth(8.0));
            prop_assert_eq!(blocks, once);
        }

        /// A pass wide enough for every line reproduces the pristine text.
        #[test]
        fn wide_pass_restores_original(text in arb_text(), narrow in 0.0f64..400.0) {
            let mut engine = ReflowEngine::new();
            let mut blocks = vec![Block::text(Some("b"), text.clone(), narrow)];
            engine.reflow(&mut blocks, &FixedCellWidth(8.0));

            blocks[0].pixel_width = 8.0 * 200.0;
            engine.reflow(&mut blocks, &FixedCellWidth(8.0));
            prop_assert_eq!(blocks[0].text_content(), text);
        }
    }
}
