use skirmish::{max_size, BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64>::try_new(8);
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8>::try_new(3);
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));

    assert_eq!(max_size::<u8>(), 2);
    assert_eq!(max_size::<u128>(), 11);
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16>::try_new(4).unwrap();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0, size: 4 })
    );
}

#[test]
fn test_full_board_and_complement() {
    let bb = !BitBoard::<u128>::try_new(11).unwrap();
    assert!(bb.is_full());
    assert_eq!(bb.count_ones(), 121);
    assert!((!bb).is_empty());

    let partial = BitBoard::<u16>::from_iter(3, [(0, 0), (2, 2)]).unwrap();
    let rest = !partial;
    assert_eq!(rest.count_ones(), 7);
    assert!((partial & rest).is_empty());
    assert_eq!(partial.count_ones() + rest.count_ones(), 9);
}

#[test]
fn test_from_bits_rejects_stray_bits() {
    let bb = BitBoard::<u16>::from_bits(3, 0b1_0000_0001).unwrap();
    assert_eq!(bb.iter_set_bits().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
    assert_eq!(
        BitBoard::<u16>::from_bits(3, 1 << 9),
        Err(BitBoardError::StrayBits { size: 3 })
    );
    assert!(matches!(
        BitBoard::<u8>::from_bits(3, 0),
        Err(BitBoardError::SizeTooLarge { .. })
    ));
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u16>::from_iter(4, [(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}
