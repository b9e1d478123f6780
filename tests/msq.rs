mod common;

use std::io::{Cursor, Read};

use wasteland_assets::{MsqBlockType, MsqHeader};

#[test]
fn uncompressed_disk0_and_disk1_are_detected() {
    common::init();

    let mut cursor = Cursor::new(*b"msq0");
    let header = MsqHeader::read(&mut cursor).unwrap();
    assert_eq!(header.block_type, MsqBlockType::Uncompressed);
    assert_eq!(header.disk, 0);

    let mut cursor = Cursor::new(*b"msq1");
    let header = MsqHeader::read(&mut cursor).unwrap();
    assert_eq!(header.block_type, MsqBlockType::Uncompressed);
    assert_eq!(header.disk, 1);
}

#[test]
fn compressed_header_reports_size_and_disk() {
    common::init();

    let mut bytes = 1234u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(b"msq\0");
    let mut cursor = Cursor::new(bytes);
    let header = MsqHeader::read(&mut cursor).unwrap();
    assert_eq!(header.block_type, MsqBlockType::Compressed);
    assert_eq!(header.size, 1234);
    assert_eq!(header.disk, 0);
}

#[test]
fn cpa_animation_header_reports_size() {
    common::init();

    let mut bytes = 77u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[0x08, 0x67, 0x01, 0x00]);
    let mut cursor = Cursor::new(bytes);
    let header = MsqHeader::read(&mut cursor).unwrap();
    assert_eq!(header.block_type, MsqBlockType::CpaAnimation);
    assert_eq!(header.size, 77);
}

#[test]
fn msq_detection_consumes_exactly_four_bytes_on_uncompressed() {
    common::init();

    let mut bytes = b"msq0".to_vec();
    bytes.extend_from_slice(b"arbitrary trailer bytes");
    let mut cursor = Cursor::new(bytes);
    let header = MsqHeader::read(&mut cursor).unwrap();
    assert_eq!(header.block_type, MsqBlockType::Uncompressed);
    assert_eq!(header.disk, 0);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"arbitrary trailer bytes");
}
