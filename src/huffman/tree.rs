/*
    wasteland-assets

    Copyright 2026 The wasteland-assets authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.
*/

//! An arena-indexed binary tree: nodes live in a `Vec` and refer to each
//! other by index rather than by pointer, the same shape as the node-pool
//! tree used elsewhere in this crate's lineage for a different format.

use std::io::{Read, Write};

use crate::bitio::{bad_argument, BitReader, BitWriter};
use crate::error::Result;

/// One tree node. A node with both children present is internal; a node
/// with neither is a leaf carrying `payload`. The format never produces
/// nodes with exactly one child.
#[derive(Debug, Clone)]
struct Node {
    left: Option<usize>,
    right: Option<usize>,
    payload: u8,
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A Huffman tree, either built from sample data or read from a stream.
/// Carries precomputed encode keys and a payload-to-leaf index so it can be
/// used for both decoding and encoding without rebuilding either table.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: usize,
    /// `(key, key_bits)` per arena index; meaningless for internal nodes.
    keys: Vec<(u32, u8)>,
    /// Arena index of the leaf for each possible byte value, if present.
    leaf_of: [Option<usize>; 256],
}

impl Tree {
    /// Builds a tree from the byte-frequency distribution of `data`, via the
    /// standard repeated smallest-two-combine construction.
    pub fn build(data: &[u8]) -> Result<Self> {
        let mut usage = [0u32; 256];
        for &b in data {
            usage[b as usize] += 1;
        }

        let mut nodes = Vec::new();
        let mut entries: Vec<(usize, u64)> = Vec::new();
        for (payload, &count) in usage.iter().enumerate() {
            if count > 0 {
                let idx = nodes.len();
                nodes.push(Node {
                    left: None,
                    right: None,
                    payload: payload as u8,
                });
                entries.push((idx, count as u64));
            }
        }

        if entries.is_empty() {
            return Err(bad_argument("cannot build a huffman tree from empty data"));
        }

        while entries.len() > 1 {
            entries.sort_by(|a, b| b.1.cmp(&a.1));
            let (left_idx, left_usage) = entries.pop().unwrap();
            let (right_idx, right_usage) = entries.pop().unwrap();
            let parent = nodes.len();
            nodes.push(Node {
                left: Some(left_idx),
                right: Some(right_idx),
                payload: 0,
            });
            entries.push((parent, left_usage + right_usage));
        }

        let root = entries[0].0;
        Ok(Self::finalize(nodes, root))
    }

    /// Reads a tree from a bitwise pre-order walk: `1` marks a leaf
    /// (followed by an 8-bit payload), `0` marks an internal node (followed
    /// by its left subtree, a discarded separator bit, then its right
    /// subtree).
    pub fn read<R: Read>(reader: &mut BitReader<R>) -> Result<Self> {
        let mut nodes = Vec::new();
        let root = read_node(reader, &mut nodes)?;
        Ok(Self::finalize(nodes, root))
    }

    /// Writes the tree in the same shape [`Self::read`] expects.
    pub fn write<W: Write>(&self, writer: &mut BitWriter<W>) -> Result<()> {
        write_node(&self.nodes, self.root, writer)
    }

    /// Decodes one byte by walking from the root, one bit per branch, until
    /// a leaf is reached. A single-symbol tree has no branches and returns
    /// its payload without consuming any bits, mirroring the degenerate
    /// behavior of the original byte-oriented reader.
    pub fn read_byte<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u8> {
        let mut idx = self.root;
        while !self.nodes[idx].is_leaf() {
            let bit = reader.read_bit()?;
            idx = if bit != 0 {
                self.nodes[idx].right.unwrap()
            } else {
                self.nodes[idx].left.unwrap()
            };
        }
        Ok(self.nodes[idx].payload)
    }

    /// Encodes one byte using its precomputed key. A single-symbol tree
    /// still emits its one-bit key, which the degenerate `read_byte` path
    /// does not consume back out; callers must not mix single-symbol trees
    /// with multi-byte streams.
    pub fn write_byte<W: Write>(&self, writer: &mut BitWriter<W>, byte: u8) -> Result<()> {
        let idx = self.leaf_of[byte as usize]
            .ok_or_else(|| bad_argument(format!("byte {byte:#04x} has no key in this tree")))?;
        let (key, key_bits) = self.keys[idx];
        for i in (0..key_bits).rev() {
            writer.write_bit(((key >> i) & 1) as u8)?;
        }
        Ok(())
    }

    /// Reads a little-endian 16-bit value as two Huffman-coded bytes.
    pub fn read_u16_le<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u16> {
        let low = self.read_byte(reader)?;
        let high = self.read_byte(reader)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Writes a little-endian 16-bit value as two Huffman-coded bytes.
    pub fn write_u16_le<W: Write>(&self, writer: &mut BitWriter<W>, word: u16) -> Result<()> {
        let [low, high] = word.to_le_bytes();
        self.write_byte(writer, low)?;
        self.write_byte(writer, high)
    }

    /// Reads `size` Huffman-coded bytes.
    pub fn read_block<R: Read>(&self, reader: &mut BitReader<R>, size: usize) -> Result<Vec<u8>> {
        let mut block = Vec::with_capacity(size);
        for _ in 0..size {
            block.push(self.read_byte(reader)?);
        }
        Ok(block)
    }

    /// Writes `data` as a sequence of Huffman-coded bytes.
    pub fn write_block<W: Write>(&self, writer: &mut BitWriter<W>, data: &[u8]) -> Result<()> {
        for &byte in data {
            self.write_byte(writer, byte)?;
        }
        Ok(())
    }

    fn finalize(nodes: Vec<Node>, root: usize) -> Self {
        let mut keys = vec![(0u32, 0u8); nodes.len()];
        build_keys(&nodes, &mut keys, root, 0, 0);

        let mut leaf_of: [Option<usize>; 256] = [None; 256];
        for (idx, node) in nodes.iter().enumerate() {
            if node.is_leaf() {
                leaf_of[node.payload as usize] = Some(idx);
            }
        }

        Tree {
            nodes,
            root,
            keys,
            leaf_of,
        }
    }
}

fn read_node<R: Read>(reader: &mut BitReader<R>, nodes: &mut Vec<Node>) -> Result<usize> {
    let bit = reader.read_bit()?;
    if bit != 0 {
        let payload = reader.read_byte()?;
        nodes.push(Node {
            left: None,
            right: None,
            payload,
        });
    } else {
        let left = read_node(reader, nodes)?;
        let _separator = reader.read_bit()?;
        let right = read_node(reader, nodes)?;
        nodes.push(Node {
            left: Some(left),
            right: Some(right),
            payload: 0,
        });
    }
    Ok(nodes.len() - 1)
}

fn write_node<W: Write>(nodes: &[Node], idx: usize, writer: &mut BitWriter<W>) -> Result<()> {
    let node = &nodes[idx];
    if let (Some(left), Some(right)) = (node.left, node.right) {
        writer.write_bit(0)?;
        write_node(nodes, left, writer)?;
        writer.write_bit(0)?;
        write_node(nodes, right, writer)?;
    } else {
        writer.write_bit(1)?;
        writer.write_byte(node.payload)?;
    }
    Ok(())
}

/// Assigns each node's `(key, key_bits)` by a pre-order walk, left branches
/// clearing the low bit and right branches setting it. A tree with only one
/// symbol gets the single-bit key `0` rather than the empty key `buildKeys`
/// would otherwise assign it.
fn build_keys(nodes: &[Node], keys: &mut [(u32, u8)], idx: usize, key: u32, key_bits: u8) {
    let node = &nodes[idx];
    if key_bits == 0 && node.is_leaf() {
        keys[idx] = (0, 1);
        return;
    }
    keys[idx] = (key, key_bits);
    if let Some(left) = node.left {
        build_keys(nodes, keys, left, key << 1, key_bits + 1);
    }
    if let Some(right) = node.right {
        build_keys(nodes, keys, right, (key << 1) | 1, key_bits + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn build_rejects_empty_data() {
        assert!(Tree::build(&[]).is_err());
    }

    #[test]
    fn encode_then_decode_round_trips_varied_frequencies() {
        let data: Vec<u8> = b"abracadabra wasteland wasteland wasteland!!".to_vec();
        let tree = Tree::build(&data).unwrap();

        let mut buf = Vec::new();
        {
            let mut writer = BitWriter::new(&mut buf);
            tree.write_block(&mut writer, &data).unwrap();
            writer.fill_byte(0).unwrap();
        }

        let mut cursor = Cursor::new(buf);
        let mut reader = BitReader::new(&mut cursor);
        let decoded = tree.read_block(&mut reader, data.len()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn serialized_tree_round_trips_through_read_and_write() {
        let data = b"mississippi river".to_vec();
        let tree = Tree::build(&data).unwrap();

        let mut tree_bytes = Vec::new();
        {
            let mut writer = BitWriter::new(&mut tree_bytes);
            tree.write(&mut writer).unwrap();
            writer.fill_byte(0).unwrap();
        }

        let mut cursor = Cursor::new(tree_bytes);
        let mut reader = BitReader::new(&mut cursor);
        let reloaded = Tree::read(&mut reader).unwrap();

        let mut payload_bytes = Vec::new();
        {
            let mut writer = BitWriter::new(&mut payload_bytes);
            tree.write_block(&mut writer, &data).unwrap();
            writer.fill_byte(0).unwrap();
        }
        let mut payload_cursor = Cursor::new(payload_bytes);
        let mut payload_reader = BitReader::new(&mut payload_cursor);
        let decoded = reloaded.read_block(&mut payload_reader, data.len()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn single_symbol_tree_encodes_one_bit_per_byte() {
        let data = vec![0x42u8; 5];
        let tree = Tree::build(&data).unwrap();
        let mut buf = Vec::new();
        {
            let mut writer = BitWriter::new(&mut buf);
            for &b in &data {
                tree.write_byte(&mut writer, b).unwrap();
            }
        }
        // Five single-bit keys pack into a single byte with padding.
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn word_round_trips() {
        let data: Vec<u8> = (0..=255).collect();
        let tree = Tree::build(&data).unwrap();
        let mut buf = Vec::new();
        {
            let mut writer = BitWriter::new(&mut buf);
            tree.write_u16_le(&mut writer, 0xBEEF).unwrap();
            writer.fill_byte(0).unwrap();
        }
        let mut cursor = Cursor::new(buf);
        let mut reader = BitReader::new(&mut cursor);
        assert_eq!(tree.read_u16_le(&mut reader).unwrap(), 0xBEEF);
    }
}
