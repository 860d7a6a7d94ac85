//! IPE (European I-beam) profiles.

use super::ProfileRow;

/// name, kg/m, h, b, tw, tf (mm), A (cm²), Ix (cm⁴), Wx (cm³), rx (cm), Iy (cm⁴), Wy (cm³), ry (cm)
pub(crate) const ROWS: &[ProfileRow] = &[
    ("IPE 80", 6.0, 80.0, 46.0, 3.8, 5.2, 7.64, 80.1, 20.0, 3.24, 8.49, 3.69, 1.05),
    ("IPE 100", 8.1, 100.0, 55.0, 4.1, 5.7, 10.3, 171.0, 34.2, 4.07, 15.9, 5.79, 1.24),
    ("IPE 120", 10.4, 120.0, 64.0, 4.4, 6.3, 13.2, 318.0, 53.0, 4.90, 27.7, 8.65, 1.45),
    ("IPE 140", 12.9, 140.0, 73.0, 4.7, 6.9, 16.4, 541.0, 77.3, 5.74, 44.9, 12.3, 1.65),
    ("IPE 160", 15.8, 160.0, 82.0, 5.0, 7.4, 20.1, 869.0, 109.0, 6.58, 68.3, 16.7, 1.84),
    ("IPE 180", 18.8, 180.0, 91.0, 5.3, 8.0, 23.9, 1317.0, 146.0, 7.42, 101.0, 22.2, 2.05),
    ("IPE 200", 22.4, 200.0, 100.0, 5.6, 8.5, 28.5, 1943.0, 194.0, 8.26, 142.0, 28.5, 2.24),
    ("IPE 220", 26.2, 220.0, 110.0, 5.9, 9.2, 33.4, 2772.0, 252.0, 9.11, 205.0, 37.3, 2.48),
    ("IPE 240", 30.7, 240.0, 120.0, 6.2, 9.8, 39.1, 3892.0, 324.0, 9.97, 284.0, 47.3, 2.69),
    ("IPE 270", 36.1, 270.0, 135.0, 6.6, 10.2, 45.9, 5790.0, 429.0, 11.2, 420.0, 62.2, 3.02),
    ("IPE 300", 42.2, 300.0, 150.0, 7.1, 10.7, 53.8, 8356.0, 557.0, 12.5, 604.0, 80.5, 3.35),
    ("IPE 330", 49.1, 330.0, 160.0, 7.5, 11.5, 62.6, 11770.0, 713.0, 13.7, 788.0, 98.5, 3.55),
    ("IPE 360", 57.1, 360.0, 170.0, 8.0, 12.7, 72.7, 16270.0, 904.0, 15.0, 1043.0, 123.0, 3.79),
    ("IPE 400", 66.3, 400.0, 180.0, 8.6, 13.5, 84.5, 23130.0, 1160.0, 16.5, 1318.0, 146.0, 3.95),
    ("IPE 450", 77.6, 450.0, 190.0, 9.4, 14.6, 98.8, 33740.0, 1500.0, 18.5, 1676.0, 176.0, 4.12),
    ("IPE 500", 90.7, 500.0, 200.0, 10.2, 16.0, 116.0, 48200.0, 1930.0, 20.4, 2142.0, 214.0, 4.31),
    ("IPE 550", 106.0, 550.0, 210.0, 11.1, 17.2, 134.0, 67120.0, 2440.0, 22.3, 2668.0, 254.0, 4.45),
    ("IPE 600", 122.0, 600.0, 220.0, 12.0, 19.0, 156.0, 92080.0, 3070.0, 24.3, 3387.0, 308.0, 4.66),
];
