//! Publicly known CRC models from the reveng CRC catalogue.
//!
//! Each entry carries its published check value (the CRC of the ASCII string
//! `"123456789"`); the test module recomputes every one of them.

use crate::feed::FeedOrder;
use crate::model::CrcModel;

/// A named CRC model from the reveng catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownModel {
    /// Catalogue name, e.g. `"CRC-16/IBM-3740"`.
    pub name: &'static str,
    /// CRC width in bits.
    pub width: u8,
    /// Truncated polynomial.
    pub poly: u32,
    /// Initial remainder.
    pub init: u32,
    /// Reflected input.
    pub refin: bool,
    /// Reflected output.
    pub refout: bool,
    /// Final XOR value.
    pub xorout: u32,
    /// CRC of `"123456789"`.
    pub check: u32,
}

impl KnownModel {
    /// Returns the model's parameters as a [`CrcModel`] with automatic feed order.
    pub fn model(&self) -> CrcModel {
        CrcModel {
            width: self.width,
            polynomial: self.poly,
            initial: self.init,
            final_xor: self.xorout,
            reflected_input: self.refin,
            reflected_output: self.refout,
            feed_order: FeedOrder::Auto,
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn known(
    name: &'static str,
    width: u8,
    poly: u32,
    init: u32,
    refin: bool,
    refout: bool,
    xorout: u32,
    check: u32,
) -> KnownModel {
    KnownModel {
        name,
        width,
        poly,
        init,
        refin,
        refout,
        xorout,
        check,
    }
}

/// The catalogue, ordered by width.
pub static KNOWN_MODELS: &[KnownModel] = &[
    known("CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0x0, 0x6),
    known("CRC-4/G-704", 4, 0x3, 0x0, true, true, 0x0, 0x7),
    known("CRC-4/INTERLAKEN", 4, 0x3, 0xf, false, false, 0xf, 0xb),
    known("CRC-5/EPC-C1G2", 5, 0x09, 0x09, false, false, 0x00, 0x00),
    known("CRC-5/G-704", 5, 0x15, 0x00, true, true, 0x00, 0x07),
    known("CRC-5/USB", 5, 0x05, 0x1f, true, true, 0x1f, 0x19),
    known("CRC-6/DARC", 6, 0x19, 0x00, true, true, 0x00, 0x26),
    known("CRC-6/G-704", 6, 0x03, 0x00, true, true, 0x00, 0x06),
    known("CRC-7/MMC", 7, 0x09, 0x00, false, false, 0x00, 0x75),
    known("CRC-7/ROHC", 7, 0x4f, 0x7f, true, true, 0x00, 0x53),
    known("CRC-7/UMTS", 7, 0x45, 0x00, false, false, 0x00, 0x61),
    known("CRC-8/AUTOSAR", 8, 0x2f, 0xff, false, false, 0xff, 0xdf),
    known("CRC-8/CDMA2000", 8, 0x9b, 0xff, false, false, 0x00, 0xda),
    known("CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15),
    known("CRC-8/DVB-S2", 8, 0xd5, 0x00, false, false, 0x00, 0xbc),
    known("CRC-8/I-432-1", 8, 0x07, 0x00, false, false, 0x55, 0xa1),
    known("CRC-8/I-CODE", 8, 0x1d, 0xfd, false, false, 0x00, 0x7e),
    known("CRC-8/LTE", 8, 0x9b, 0x00, false, false, 0x00, 0xea),
    known("CRC-8/MAXIM-DOW", 8, 0x31, 0x00, true, true, 0x00, 0xa1),
    known("CRC-8/OPENSAFETY", 8, 0x2f, 0x00, false, false, 0x00, 0x3e),
    known("CRC-8/ROHC", 8, 0x07, 0xff, true, true, 0x00, 0xd0),
    known("CRC-8/SAE-J1850", 8, 0x1d, 0xff, false, false, 0xff, 0x4b),
    known("CRC-8/SMBUS", 8, 0x07, 0x00, false, false, 0x00, 0xf4),
    known("CRC-8/TECH-3250", 8, 0x1d, 0xff, true, true, 0x00, 0x97),
    known("CRC-8/WCDMA", 8, 0x9b, 0x00, true, true, 0x00, 0x25),
    known("CRC-10/ATM", 10, 0x233, 0x000, false, false, 0x000, 0x199),
    known("CRC-10/CDMA2000", 10, 0x3d9, 0x3ff, false, false, 0x000, 0x233),
    known("CRC-11/FLEXRAY", 11, 0x385, 0x01a, false, false, 0x000, 0x5a3),
    known("CRC-11/UMTS", 11, 0x307, 0x000, false, false, 0x000, 0x061),
    known("CRC-12/CDMA2000", 12, 0xf13, 0xfff, false, false, 0x000, 0xd4d),
    known("CRC-12/DECT", 12, 0x80f, 0x000, false, false, 0x000, 0xf5b),
    known("CRC-12/UMTS", 12, 0x80f, 0x000, false, true, 0x000, 0xdaf),
    known("CRC-13/BBC", 13, 0x1cf5, 0x0000, false, false, 0x0000, 0x04fa),
    known("CRC-14/DARC", 14, 0x0805, 0x0000, true, true, 0x0000, 0x082d),
    known("CRC-15/CAN", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059e),
    known("CRC-15/MPT1327", 15, 0x6815, 0x0000, false, false, 0x0001, 0x2566),
    known("CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xbb3d),
    known("CRC-16/CDMA2000", 16, 0xc867, 0xffff, false, false, 0x0000, 0x4c06),
    known("CRC-16/CMS", 16, 0x8005, 0xffff, false, false, 0x0000, 0xaee7),
    known("CRC-16/DDS-110", 16, 0x8005, 0x800d, false, false, 0x0000, 0x9ecf),
    known("CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007e),
    known("CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007f),
    known("CRC-16/DNP", 16, 0x3d65, 0x0000, true, true, 0xffff, 0xea82),
    known("CRC-16/EN-13757", 16, 0x3d65, 0x0000, false, false, 0xffff, 0xc2b7),
    known("CRC-16/GENIBUS", 16, 0x1021, 0xffff, false, false, 0xffff, 0xd64e),
    known("CRC-16/IBM-3740", 16, 0x1021, 0xffff, false, false, 0x0000, 0x29b1),
    known("CRC-16/IBM-SDLC", 16, 0x1021, 0xffff, true, true, 0xffff, 0x906e),
    known("CRC-16/ISO-IEC-14443-3-A", 16, 0x1021, 0xc6c6, true, true, 0x0000, 0xbf05),
    known("CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189),
    known("CRC-16/LJ1200", 16, 0x6f63, 0x0000, false, false, 0x0000, 0xbdf4),
    known("CRC-16/MAXIM-DOW", 16, 0x8005, 0x0000, true, true, 0xffff, 0x44c2),
    known("CRC-16/MCRF4XX", 16, 0x1021, 0xffff, true, true, 0x0000, 0x6f91),
    known("CRC-16/MODBUS", 16, 0x8005, 0xffff, true, true, 0x0000, 0x4b37),
    known("CRC-16/OPENSAFETY-A", 16, 0x5935, 0x0000, false, false, 0x0000, 0x5d38),
    known("CRC-16/OPENSAFETY-B", 16, 0x755b, 0x0000, false, false, 0x0000, 0x20fe),
    known("CRC-16/PROFIBUS", 16, 0x1dcf, 0xffff, false, false, 0xffff, 0xa819),
    known("CRC-16/RIELLO", 16, 0x1021, 0xb2aa, true, true, 0x0000, 0x63d0),
    known("CRC-16/SPI-FUJITSU", 16, 0x1021, 0x1d0f, false, false, 0x0000, 0xe5cc),
    known("CRC-16/T10-DIF", 16, 0x8bb7, 0x0000, false, false, 0x0000, 0xd0db),
    known("CRC-16/TELEDISK", 16, 0xa097, 0x0000, false, false, 0x0000, 0x0fb3),
    known("CRC-16/TMS37157", 16, 0x1021, 0x89ec, true, true, 0x0000, 0x26b1),
    known("CRC-16/UMTS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xfee8),
    known("CRC-16/USB", 16, 0x8005, 0xffff, true, true, 0xffff, 0xb4c8),
    known("CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31c3),
    known("CRC-24/BLE", 24, 0x00065b, 0x555555, true, true, 0x000000, 0xc25a56),
    known("CRC-24/FLEXRAY-A", 24, 0x5d6dcb, 0xfedcba, false, false, 0x000000, 0x7979bd),
    known("CRC-24/FLEXRAY-B", 24, 0x5d6dcb, 0xabcdef, false, false, 0x000000, 0x1f23b8),
    known("CRC-24/INTERLAKEN", 24, 0x328b63, 0xffffff, false, false, 0xffffff, 0xb4f3e6),
    known("CRC-24/LTE-A", 24, 0x864cfb, 0x000000, false, false, 0x000000, 0xcde703),
    known("CRC-24/LTE-B", 24, 0x800063, 0x000000, false, false, 0x000000, 0x23ef52),
    known("CRC-24/OPENPGP", 24, 0x864cfb, 0xb704ce, false, false, 0x000000, 0x21cf02),
    known("CRC-30/CDMA", 30, 0x2030b9c7, 0x3fffffff, false, false, 0x3fffffff, 0x04c34abf),
    known("CRC-31/PHILIPS", 31, 0x04c11db7, 0x7fffffff, false, false, 0x7fffffff, 0x0ce9e46c),
    known("CRC-32/AIXM", 32, 0x814141ab, 0x00000000, false, false, 0x00000000, 0x3010bf7f),
    known("CRC-32/AUTOSAR", 32, 0xf4acfb13, 0xffffffff, true, true, 0xffffffff, 0x1697d06a),
    known("CRC-32/BASE91-D", 32, 0xa833982b, 0xffffffff, true, true, 0xffffffff, 0x87315576),
    known("CRC-32/BZIP2", 32, 0x04c11db7, 0xffffffff, false, false, 0xffffffff, 0xfc891918),
    known("CRC-32/CKSUM", 32, 0x04c11db7, 0x00000000, false, false, 0xffffffff, 0x765e7680),
    known("CRC-32/ISCSI", 32, 0x1edc6f41, 0xffffffff, true, true, 0xffffffff, 0xe3069283),
    known("CRC-32/ISO-HDLC", 32, 0x04c11db7, 0xffffffff, true, true, 0xffffffff, 0xcbf43926),
    known("CRC-32/JAMCRC", 32, 0x04c11db7, 0xffffffff, true, true, 0x00000000, 0x340bc6d9),
    known("CRC-32/MPEG-2", 32, 0x04c11db7, 0xffffffff, false, false, 0x00000000, 0x0376e6e7),
    known("CRC-32/XFER", 32, 0x000000af, 0x00000000, false, false, 0x00000000, 0xbd0be338),
];

/// Returns the catalogue entries of the given width.
pub fn known_models(width: u8) -> impl Iterator<Item = &'static KnownModel> {
    KNOWN_MODELS.iter().filter(move |m| m.width == width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitMessage;
    use crate::engine::BitCrcEngine;

    #[test]
    fn every_check_value_reproduces() {
        let msg = BitMessage::from_bytes(b"123456789");
        for known in KNOWN_MODELS {
            let mut engine = BitCrcEngine::for_model(&known.model()).unwrap();
            assert_eq!(
                engine.compute(known.init, &msg),
                known.check,
                "{} check value",
                known.name
            );
        }
    }

    #[test]
    fn every_model_fits_its_width() {
        for known in KNOWN_MODELS {
            assert!(known.model().validate().is_ok(), "{}", known.name);
            assert!(
                crate::width::check_fits("check", known.check as u64, known.width).is_ok(),
                "{}",
                known.name
            );
        }
    }

    #[test]
    fn catalogue_is_sorted_by_width() {
        assert!(KNOWN_MODELS.windows(2).all(|w| w[0].width <= w[1].width));
    }

    #[test]
    fn lookup_by_width() {
        let names: Vec<_> = known_models(4).map(|m| m.name).collect();
        assert_eq!(names, vec!["CRC-4/G-704", "CRC-4/INTERLAKEN"]);
        assert_eq!(known_models(9).count(), 0);
    }
}
