mod common;

use std::io::Cursor;

use wasteland_assets::bitio::{BitReader, BitWriter};

#[test]
fn bits_round_trip_msb_first_across_byte_boundaries() {
    common::init();

    let bits = [1u8, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 1, 1];
    let mut buf = Vec::new();
    {
        let mut writer = BitWriter::new(&mut buf);
        for &bit in &bits {
            writer.write_bit(bit).unwrap();
        }
        writer.fill_byte(0).unwrap();
    }
    // 17 bits pad to three bytes.
    assert_eq!(buf.len(), 3);

    let mut cursor = Cursor::new(buf);
    let mut reader = BitReader::new(&mut cursor);
    for &bit in &bits {
        assert_eq!(reader.read_bit().unwrap(), bit);
    }
}

#[test]
fn byte_write_then_byte_read_round_trips() {
    common::init();

    let data = [0x00u8, 0xFF, 0x42, 0x81];
    let mut buf = Vec::new();
    {
        let mut writer = BitWriter::new(&mut buf);
        for &b in &data {
            writer.write_byte(b).unwrap();
        }
    }
    let mut cursor = Cursor::new(buf);
    let mut reader = BitReader::new(&mut cursor);
    for &b in &data {
        assert_eq!(reader.read_byte().unwrap(), b);
    }
}
