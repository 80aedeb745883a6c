// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Top-level configuration layer.

use serde::{Deserialize, Serialize};

use crate::sections::{LoggingConfigLayer, NodeDebugConfigLayer};

/// One source's view of the configuration, mirroring the TOML file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KdiagConfigLayer {
	pub node_debug: Option<NodeDebugConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl KdiagConfigLayer {
	pub fn merge(&mut self, other: KdiagConfigLayer) {
		merge_section(&mut self.node_debug, other.node_debug, NodeDebugConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, overlay: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), overlay) {
		(Some(existing), Some(overlay)) => merge(existing, overlay),
		(None, Some(overlay)) => *base = Some(overlay),
		(_, None) => {}
	}
}
