// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Debug pod name generation.

pub const POD_NAME_PREFIX: &str = "node-debug-";
pub const MAX_NAME_LENGTH: usize = 63;
const SUFFIX_LENGTH: usize = 5;
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const NODE_FALLBACK: &str = "node";

/// Longest node fragment that still fits `node-debug-<node>-<suffix>`.
pub const MAX_NODE_FRAGMENT: usize = MAX_NAME_LENGTH - POD_NAME_PREFIX.len() - 1 - SUFFIX_LENGTH;

/// Reduce a node name to a DNS-1123 label fragment.
///
/// Output only contains `[a-z0-9-]`, never starts or ends with `-`, has no
/// repeated dashes, is at most [`MAX_NODE_FRAGMENT`] long and is never empty.
pub fn sanitize_node_name(node: &str) -> String {
	let mut out = String::with_capacity(node.len());
	for c in node.chars().flat_map(char::to_lowercase) {
		let c = if c.is_ascii_lowercase() || c.is_ascii_digit() {
			c
		} else {
			'-'
		};
		if c == '-' && (out.is_empty() || out.ends_with('-')) {
			continue;
		}
		out.push(c);
	}

	// Everything left is ASCII, so byte truncation is safe.
	out.truncate(MAX_NODE_FRAGMENT);
	let trimmed = out.trim_end_matches('-');

	if trimmed.is_empty() {
		NODE_FALLBACK.to_string()
	} else {
		trimmed.to_string()
	}
}

/// Generate a unique pod name for a debug run on `node`.
pub fn generate_pod_name(node: &str) -> String {
	generate_pod_name_with(node, &mut fastrand::Rng::new())
}

pub(crate) fn generate_pod_name_with(node: &str, rng: &mut fastrand::Rng) -> String {
	let suffix: String = (0..SUFFIX_LENGTH)
		.map(|_| SUFFIX_ALPHABET[rng.usize(..SUFFIX_ALPHABET.len())] as char)
		.collect();
	format!("{POD_NAME_PREFIX}{}-{suffix}", sanitize_node_name(node))
}
