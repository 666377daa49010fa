// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Printers for set-up reports and deferred warnings.

use std::{borrow::Cow, sync::Mutex};

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

lazy_static::lazy_static! {
    static ref COLLECTED_WARNINGS: Mutex<Vec<Vec<Cow<'static, str>>>> = Mutex::new(vec![]);
}

/// Draw blocks of lines as a tree hanging off a title. Lines after the first
/// of a block get a plain bar so blocks read as units.
fn render_blocks(level: log::Level, blocks: &[Vec<Cow<'static, str>>]) {
    let num_blocks = blocks.len();
    for (i_block, block) in blocks.iter().enumerate() {
        let last_block = i_block + 1 == num_blocks;
        for (i_line, line) in block.iter().enumerate() {
            let symbol = if i_line > 0 {
                VERTICAL
            } else if last_block && block.len() == 1 {
                UP_AND_RIGHT
            } else {
                VERTICAL_AND_RIGHT
            };
            log::log!(level, "{symbol} {line}");
        }
    }
}

/// Collects related info lines so they can be displayed under a bold title.
pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Vec<Cow<'static, str>>>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.push(block);
    }

    pub(crate) fn display(self) {
        log::info!("{}", console::style(self.title).bold());
        render_blocks(log::Level::Info, &self.blocks);
        log::info!("");
    }
}

/// Queue a warning instead of logging it on the spot. Queued warnings are
/// held back until [display_warnings], so they come out as one group rather
/// than interleaved with the set-up report.
pub(crate) trait Warn {
    fn warn(self);
}

impl Warn for &'static str {
    fn warn(self) {
        COLLECTED_WARNINGS.lock().unwrap().push(vec![self.into()]);
    }
}

impl Warn for String {
    fn warn(self) {
        COLLECTED_WARNINGS.lock().unwrap().push(vec![self.into()]);
    }
}

impl<const N: usize> Warn for [Cow<'static, str>; N] {
    fn warn(self) {
        COLLECTED_WARNINGS.lock().unwrap().push(self.to_vec());
    }
}

/// Print the warnings queued up while arguments were ingested, then clear
/// them. Call this once, after all arguments have been turned into
/// parameters.
pub(crate) fn display_warnings() {
    let mut blocks = COLLECTED_WARNINGS.lock().unwrap();
    if blocks.is_empty() {
        return;
    }

    log::warn!("{}", console::style("Warnings").bold());
    render_blocks(log::Level::Warn, &blocks);
    log::warn!("");
    blocks.clear();
}
