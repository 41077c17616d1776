//! Partition and field layout tables for BC6H and BC7.
//!
//! Transcribed from bcdec <https://github.com/iOrange/bcdec>; partition tables match the D3D
//! BC7 specification.

/// Interpolation weights out of 64 for 2, 3 and 4-bit indices.
pub(crate) static WEIGHTS_2: [u8; 4] = [0, 21, 43, 64];
pub(crate) static WEIGHTS_3: [u8; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
pub(crate) static WEIGHTS_4: [u8; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Subset of each texel for the 64 two-subset partitions, 2 bits per texel, texel 0 in the low bits.
pub(crate) static PARTITIONS_2: [u32; 64] = [
    0x50505050, 0x40404040, 0x54545454, 0x54505040,
    0x50404000, 0x55545450, 0x55545040, 0x54504000,
    0x50400000, 0x55555450, 0x55544000, 0x54400000,
    0x55555440, 0x55550000, 0x55555500, 0x55000000,
    0x55150100, 0x00004054, 0x15010000, 0x00405054,
    0x00004050, 0x15050100, 0x05010000, 0x40505054,
    0x00404050, 0x05010100, 0x14141414, 0x05141450,
    0x01155440, 0x00555500, 0x15014054, 0x05414150,
    0x44444444, 0x55005500, 0x11441144, 0x05055050,
    0x05500550, 0x11114444, 0x41144114, 0x44111144,
    0x15055054, 0x01055040, 0x05041050, 0x05455150,
    0x14414114, 0x50050550, 0x41411414, 0x00141400,
    0x00041504, 0x00105410, 0x10541000, 0x04150400,
    0x50410514, 0x41051450, 0x05415014, 0x14054150,
    0x41050514, 0x41505014, 0x40011554, 0x54150140,
    0x50505500, 0x00555050, 0x15151010, 0x54540404,
];

/// Subset of each texel for the 64 three-subset partitions, 2 bits per texel.
pub(crate) static PARTITIONS_3: [u32; 64] = [
    0xaa685050, 0x6a5a5040, 0x5a5a4200, 0x5450a0a8,
    0xa5a50000, 0xa0a05050, 0x5555a0a0, 0x5a5a5050,
    0xaa550000, 0xaa555500, 0xaaaa5500, 0x90909090,
    0x94949494, 0xa4a4a4a4, 0xa9a59450, 0x2a0a4250,
    0xa5945040, 0x0a425054, 0xa5a5a500, 0x55a0a0a0,
    0xa8a85454, 0x6a6a4040, 0xa4a45000, 0x1a1a0500,
    0x0050a4a4, 0xaaa59090, 0x14696914, 0x69691400,
    0xa08585a0, 0xaa821414, 0x50a4a450, 0x6a5a0200,
    0xa9a58000, 0x5090a0a8, 0xa8a09050, 0x24242424,
    0x00aa5500, 0x24924924, 0x24499224, 0x50a50a50,
    0x500aa550, 0xaaaa4444, 0x66660000, 0xa5a0a5a0,
    0x50a050a0, 0x69286928, 0x44aaaa44, 0x66666600,
    0xaa444444, 0x54a854a8, 0x95809580, 0x96969600,
    0xa85454a8, 0x80959580, 0xaa141414, 0x96960000,
    0xaaaa1414, 0xa05050a0, 0xa0a5a5a0, 0x96000000,
    0x40804080, 0xa9a8a9a8, 0xaaaaaa44, 0x2a4a5254,
];

/// Anchor texel of subset 1 for the two-subset partitions.
pub(crate) static ANCHORS_2: [u8; 64] = [
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 2, 8, 2, 2, 8, 8, 15, 2, 8, 2, 2, 8, 8, 2, 2,
    15, 15, 6, 8, 2, 8, 15, 15, 2, 8, 2, 2, 2, 15, 15, 6,
    6, 2, 6, 8, 15, 15, 2, 2, 15, 15, 15, 15, 15, 2, 2, 15,
];

/// Anchor texels of subsets 1 and 2 for the three-subset partitions.
pub(crate) static ANCHORS_3: [[u8; 2]; 64] = [
    [3, 15], [3, 8], [15, 8], [15, 3], [8, 15], [3, 15], [15, 3], [15, 8],
    [8, 15], [8, 15], [6, 15], [6, 15], [6, 15], [5, 15], [3, 15], [3, 8],
    [3, 15], [3, 8], [8, 15], [15, 3], [3, 15], [3, 8], [6, 15], [10, 8],
    [5, 3], [8, 15], [8, 6], [6, 10], [8, 15], [5, 15], [15, 10], [15, 8],
    [8, 15], [15, 3], [3, 15], [5, 10], [6, 10], [10, 8], [8, 9], [15, 10],
    [15, 6], [3, 15], [15, 8], [5, 15], [15, 3], [15, 6], [15, 6], [15, 8],
    [3, 15], [15, 3], [5, 15], [5, 15], [5, 15], [8, 15], [5, 15], [10, 15],
    [5, 15], [10, 15], [8, 15], [13, 15], [15, 3], [12, 15], [3, 15], [3, 8],
];

/// One endpoint bit field of a BC6H mode, in stream order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    /// 0 = red, 1 = green, 2 = blue.
    pub channel: u8,
    /// Endpoint 0-3; subsets use endpoints (0, 1) and (2, 3).
    pub endpoint: u8,
    /// Position of the field's lowest bit within the endpoint.
    pub shift: u8,
    /// Width of the field.
    pub bits: u8,
    /// The field is stored most significant bit first.
    pub reversed: bool,
}

const fn f(channel: u8, endpoint: u8, shift: u8, bits: u8) -> Field {
    Field {
        channel,
        endpoint,
        shift,
        bits,
        reversed: false,
    }
}

const fn rev(channel: u8, endpoint: u8, shift: u8, bits: u8) -> Field {
    Field {
        channel,
        endpoint,
        shift,
        bits,
        reversed: true,
    }
}

/// Endpoint field layout of each BC6H mode, following the mode bits.
pub(crate) static BC6H_FIELDS: [&[Field]; 14] = [
    // Mode 1, mode bits 0b00000
    &[
        f(1, 2, 4, 1), f(2, 2, 4, 1), f(2, 3, 4, 1), f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10),
        f(0, 1, 0, 5), f(1, 3, 4, 1), f(1, 2, 0, 4), f(1, 1, 0, 5), f(2, 3, 0, 1), f(1, 3, 0, 4),
        f(2, 1, 0, 5), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 5), f(2, 3, 2, 1), f(0, 3, 0, 5),
        f(2, 3, 3, 1),
    ],
    // Mode 2, mode bits 0b00001
    &[
        f(1, 2, 5, 1), f(1, 3, 4, 1), f(1, 3, 5, 1), f(0, 0, 0, 7), f(2, 3, 0, 1), f(2, 3, 1, 1),
        f(2, 2, 4, 1), f(1, 0, 0, 7), f(2, 2, 5, 1), f(2, 3, 2, 1), f(1, 2, 4, 1), f(2, 0, 0, 7),
        f(2, 3, 3, 1), f(2, 3, 5, 1), f(2, 3, 4, 1), f(0, 1, 0, 6), f(1, 2, 0, 4), f(1, 1, 0, 6),
        f(1, 3, 0, 4), f(2, 1, 0, 6), f(2, 2, 0, 4), f(0, 2, 0, 6), f(0, 3, 0, 6),
    ],
    // Mode 3, mode bits 0b00010
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 5), f(0, 0, 10, 1),
        f(1, 2, 0, 4), f(1, 1, 0, 4), f(1, 0, 10, 1), f(2, 3, 0, 1), f(1, 3, 0, 4), f(2, 1, 0, 4),
        f(2, 0, 10, 1), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 5), f(2, 3, 2, 1), f(0, 3, 0, 5),
        f(2, 3, 3, 1),
    ],
    // Mode 4, mode bits 0b00110
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 4), f(0, 0, 10, 1),
        f(1, 3, 4, 1), f(1, 2, 0, 4), f(1, 1, 0, 5), f(1, 0, 10, 1), f(1, 3, 0, 4), f(2, 1, 0, 4),
        f(2, 0, 10, 1), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 4), f(2, 3, 0, 1), f(2, 3, 2, 1),
        f(0, 3, 0, 4), f(1, 2, 4, 1), f(2, 3, 3, 1),
    ],
    // Mode 5, mode bits 0b01010
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 4), f(0, 0, 10, 1),
        f(2, 2, 4, 1), f(1, 2, 0, 4), f(1, 1, 0, 4), f(1, 0, 10, 1), f(2, 3, 0, 1), f(1, 3, 0, 4),
        f(2, 1, 0, 5), f(2, 0, 10, 1), f(2, 2, 0, 4), f(0, 2, 0, 4), f(2, 3, 1, 1), f(2, 3, 2, 1),
        f(0, 3, 0, 4), f(2, 3, 4, 1), f(2, 3, 3, 1),
    ],
    // Mode 6, mode bits 0b01110
    &[
        f(0, 0, 0, 9), f(2, 2, 4, 1), f(1, 0, 0, 9), f(1, 2, 4, 1), f(2, 0, 0, 9), f(2, 3, 4, 1),
        f(0, 1, 0, 5), f(1, 3, 4, 1), f(1, 2, 0, 4), f(1, 1, 0, 5), f(2, 3, 0, 1), f(1, 3, 0, 4),
        f(2, 1, 0, 5), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 5), f(2, 3, 2, 1), f(0, 3, 0, 5),
        f(2, 3, 3, 1),
    ],
    // Mode 7, mode bits 0b10010
    &[
        f(0, 0, 0, 8), f(1, 3, 4, 1), f(2, 2, 4, 1), f(1, 0, 0, 8), f(2, 3, 2, 1), f(1, 2, 4, 1),
        f(2, 0, 0, 8), f(2, 3, 3, 1), f(2, 3, 4, 1), f(0, 1, 0, 6), f(1, 2, 0, 4), f(1, 1, 0, 5),
        f(2, 3, 0, 1), f(1, 3, 0, 4), f(2, 1, 0, 5), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 6),
        f(0, 3, 0, 6),
    ],
    // Mode 8, mode bits 0b10110
    &[
        f(0, 0, 0, 8), f(2, 3, 0, 1), f(2, 2, 4, 1), f(1, 0, 0, 8), f(1, 2, 5, 1), f(1, 2, 4, 1),
        f(2, 0, 0, 8), f(1, 3, 5, 1), f(2, 3, 4, 1), f(0, 1, 0, 5), f(1, 3, 4, 1), f(1, 2, 0, 4),
        f(1, 1, 0, 6), f(1, 3, 0, 4), f(2, 1, 0, 5), f(2, 3, 1, 1), f(2, 2, 0, 4), f(0, 2, 0, 5),
        f(2, 3, 2, 1), f(0, 3, 0, 5), f(2, 3, 3, 1),
    ],
    // Mode 9, mode bits 0b11010
    &[
        f(0, 0, 0, 8), f(2, 3, 1, 1), f(2, 2, 4, 1), f(1, 0, 0, 8), f(2, 2, 5, 1), f(1, 2, 4, 1),
        f(2, 0, 0, 8), f(2, 3, 5, 1), f(2, 3, 4, 1), f(0, 1, 0, 5), f(1, 3, 4, 1), f(1, 2, 0, 4),
        f(1, 1, 0, 5), f(2, 3, 0, 1), f(1, 3, 0, 4), f(2, 1, 0, 6), f(2, 2, 0, 4), f(0, 2, 0, 5),
        f(2, 3, 2, 1), f(0, 3, 0, 5), f(2, 3, 3, 1),
    ],
    // Mode 10, mode bits 0b11110
    &[
        f(0, 0, 0, 6), f(1, 3, 4, 1), f(2, 3, 0, 1), f(2, 3, 1, 1), f(2, 2, 4, 1), f(1, 0, 0, 6),
        f(1, 2, 5, 1), f(2, 2, 5, 1), f(2, 3, 2, 1), f(1, 2, 4, 1), f(2, 0, 0, 6), f(1, 3, 5, 1),
        f(2, 3, 3, 1), f(2, 3, 5, 1), f(2, 3, 4, 1), f(0, 1, 0, 6), f(1, 2, 0, 4), f(1, 1, 0, 6),
        f(1, 3, 0, 4), f(2, 1, 0, 6), f(2, 2, 0, 4), f(0, 2, 0, 6), f(0, 3, 0, 6),
    ],
    // Mode 11, mode bits 0b00011
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 10), f(1, 1, 0, 10),
        f(2, 1, 0, 10),
    ],
    // Mode 12, mode bits 0b00111
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 9), f(0, 0, 10, 1),
        f(1, 1, 0, 9), f(1, 0, 10, 1), f(2, 1, 0, 9), f(2, 0, 10, 1),
    ],
    // Mode 13, mode bits 0b01011
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 8), rev(0, 0, 10, 2),
        f(1, 1, 0, 8), rev(1, 0, 10, 2), f(2, 1, 0, 8), rev(2, 0, 10, 2),
    ],
    // Mode 14, mode bits 0b01111
    &[
        f(0, 0, 0, 10), f(1, 0, 0, 10), f(2, 0, 0, 10), f(0, 1, 0, 4), rev(0, 0, 10, 6),
        f(1, 1, 0, 4), rev(1, 0, 10, 6), f(2, 1, 0, 4), rev(2, 0, 10, 6),
    ],
];
