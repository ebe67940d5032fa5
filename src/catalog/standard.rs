//! The catalog shipped with the crate
//!
//! Planetary elements are the JPL "Keplerian Elements for Approximate
//! Positions of the Major Planets" fit for 1800–2050, published with rates per
//! Julian century. Star positions are J2000.0.

use super::{Body, CatalogBody};
use crate::coordinates::Equatorial;
use crate::ephemeris::OrbitalElements;

/// a (AU), e, I, L, ϖ, Ω (degrees) with rates per century
type ElementTable = [(f64, f64); 6];

const PLANETS: [(&str, f64, ElementTable); 7] = [
    (
        "mercury",
        -0.42,
        [
            (0.387_099_27, 0.000_000_37),
            (0.205_635_93, 0.000_019_06),
            (7.004_979_02, -0.005_947_49),
            (252.250_323_50, 149_472.674_111_75),
            (77.457_796_28, 0.160_476_89),
            (48.330_765_93, -0.125_340_81),
        ],
    ),
    (
        "venus",
        -4.40,
        [
            (0.723_335_66, 0.000_003_90),
            (0.006_776_72, -0.000_041_07),
            (3.394_676_05, -0.000_788_90),
            (181.979_099_50, 58_517.815_387_29),
            (131.602_467_18, 0.002_683_29),
            (76.679_842_55, -0.277_694_18),
        ],
    ),
    (
        "mars",
        0.71,
        [
            (1.523_710_34, 0.000_018_47),
            (0.093_394_10, 0.000_078_82),
            (1.849_691_42, -0.008_131_31),
            (-4.553_432_05, 19_140.302_684_99),
            (-23.943_629_59, 0.444_410_88),
            (49.559_538_91, -0.292_573_43),
        ],
    ),
    (
        "jupiter",
        -2.20,
        [
            (5.202_887_00, -0.000_116_07),
            (0.048_386_24, -0.000_132_53),
            (1.304_396_95, -0.001_837_14),
            (34.396_440_51, 3_034.746_127_75),
            (14.728_479_83, 0.212_526_68),
            (100.473_909_09, 0.204_691_06),
        ],
    ),
    (
        "saturn",
        0.46,
        [
            (9.536_675_94, -0.001_250_60),
            (0.053_861_79, -0.000_509_91),
            (2.485_991_87, 0.001_936_09),
            (49.954_244_23, 1_222.493_622_01),
            (92.598_878_31, -0.418_972_16),
            (113.662_424_48, -0.288_677_94),
        ],
    ),
    (
        "uranus",
        5.68,
        [
            (19.189_164_64, -0.001_961_76),
            (0.047_257_44, -0.000_043_97),
            (0.772_637_83, -0.002_429_39),
            (313.238_104_51, 428.482_027_85),
            (170.954_276_30, 0.408_052_81),
            (74.016_925_03, 0.042_405_89),
        ],
    ),
    (
        "neptune",
        7.78,
        [
            (30.069_922_76, 0.000_262_91),
            (0.008_590_48, 0.000_051_05),
            (1.770_043_47, 0.000_353_72),
            (-55.120_029_69, 218.459_453_25),
            (44.964_762_27, -0.322_414_64),
            (131.784_225_74, -0.005_086_64),
        ],
    ),
];

/// id, right ascension (hours), declination (degrees), visual magnitude
const STARS: [(&str, f64, f64, f64); 20] = [
    ("sirius", 6.752_48, -16.716_1, -1.46),
    ("canopus", 6.399_20, -52.695_7, -0.74),
    ("arcturus", 14.261_02, 19.182_4, -0.05),
    ("rigil_kentaurus", 14.660_14, -60.833_9, -0.01),
    ("vega", 18.615_65, 38.783_7, 0.03),
    ("capella", 5.278_16, 45.998_0, 0.08),
    ("rigel", 5.242_30, -8.201_6, 0.13),
    ("procyon", 7.655_03, 5.225_0, 0.34),
    ("achernar", 1.628_57, -57.236_8, 0.46),
    ("betelgeuse", 5.919_53, 7.407_1, 0.50),
    ("hadar", 14.063_72, -60.373_0, 0.61),
    ("altair", 19.846_39, 8.868_3, 0.76),
    ("acrux", 12.443_30, -63.099_1, 0.76),
    ("aldebaran", 4.598_68, 16.509_3, 0.86),
    ("antares", 16.490_13, -26.432_0, 0.96),
    ("spica", 13.419_88, -11.161_3, 0.97),
    ("pollux", 7.755_26, 28.026_2, 1.14),
    ("fomalhaut", 22.960_85, -29.622_2, 1.16),
    ("deneb", 20.690_53, 45.280_3, 1.25),
    ("polaris", 2.530_30, 89.264_1, 1.98),
];

/// Entries of the standard catalog, luminaries first
pub(super) fn standard_bodies() -> Vec<CatalogBody> {
    let mut bodies = vec![
        CatalogBody::new("sun", Body::Sun).with_magnitude(-26.74),
        CatalogBody::new("moon", Body::Moon).with_magnitude(-12.74),
    ];

    bodies.extend(PLANETS.iter().map(|(id, magnitude, table)| {
        CatalogBody::new(id, Body::Planet(OrbitalElements::from_century_rates(*table)))
            .with_magnitude(*magnitude)
    }));

    bodies.extend(STARS.iter().map(|(id, ra, dec, magnitude)| {
        CatalogBody::new(id, Body::Star(Equatorial::new(*ra, *dec))).with_magnitude(*magnitude)
    }));

    bodies
}
