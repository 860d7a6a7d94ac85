//! W (wide flange) profiles, metric Gerdau table.
//!
//! Declared grouped by nominal height, as printed in the manufacturer's
//! catalog. Selection order is derived from weight, see [`super::ProfileCatalog`].

use super::ProfileRow;

/// name, kg/m, d, bf, tw, tf (mm), A (cm²), Ix (cm⁴), Wx (cm³), rx (cm), Iy (cm⁴), Wy (cm³), ry (cm)
pub(crate) const ROWS: &[ProfileRow] = &[
    // W 150
    ("W 150 x 13,0", 13.0, 148.0, 100.0, 4.3, 4.9, 16.6, 635.0, 85.8, 6.18, 82.0, 16.4, 2.22),
    ("W 150 x 18,0", 18.0, 153.0, 102.0, 5.8, 7.1, 23.4, 939.0, 122.8, 6.34, 126.0, 24.7, 2.32),
    ("W 150 x 22,5", 22.5, 152.0, 152.0, 5.8, 6.6, 29.0, 1229.0, 161.7, 6.51, 387.0, 50.9, 3.65),
    // W 200
    ("W 200 x 15,0", 15.0, 200.0, 100.0, 4.3, 5.2, 19.4, 1305.0, 130.5, 8.20, 87.0, 17.4, 2.12),
    ("W 200 x 19,3", 19.3, 203.0, 102.0, 5.8, 6.5, 25.1, 1686.0, 166.1, 8.19, 116.0, 22.7, 2.14),
    ("W 200 x 22,5", 22.5, 206.0, 102.0, 6.2, 8.0, 29.0, 2029.0, 197.0, 8.37, 142.0, 27.9, 2.22),
    ("W 200 x 26,6", 26.6, 207.0, 133.0, 5.8, 8.4, 34.2, 2611.0, 252.3, 8.73, 330.0, 49.6, 3.10),
    ("W 200 x 31,3", 31.3, 210.0, 134.0, 6.4, 10.2, 40.3, 3168.0, 301.7, 8.86, 410.0, 61.2, 3.19),
    // W 250
    ("W 250 x 17,9", 17.9, 251.0, 101.0, 4.8, 5.3, 23.1, 2291.0, 182.6, 9.96, 91.0, 18.1, 1.99),
    ("W 250 x 22,3", 22.3, 254.0, 102.0, 5.8, 6.9, 28.9, 2939.0, 231.4, 10.09, 123.0, 24.1, 2.06),
    ("W 250 x 25,3", 25.3, 257.0, 102.0, 6.1, 8.4, 32.6, 3473.0, 270.2, 10.31, 149.0, 29.3, 2.14),
    ("W 250 x 32,7", 32.7, 258.0, 146.0, 6.1, 9.1, 42.1, 4937.0, 382.7, 10.83, 473.0, 64.8, 3.35),
    // W 310
    ("W 310 x 21,0", 21.0, 303.0, 101.0, 5.1, 5.7, 27.2, 3776.0, 249.2, 11.77, 98.0, 19.5, 1.90),
    ("W 310 x 23,8", 23.8, 305.0, 101.0, 5.6, 6.7, 30.7, 4346.0, 285.0, 11.89, 116.0, 22.9, 1.94),
    ("W 310 x 28,3", 28.3, 309.0, 102.0, 6.0, 8.9, 36.5, 5500.0, 356.0, 12.27, 158.0, 31.0, 2.08),
    ("W 310 x 38,7", 38.7, 310.0, 165.0, 5.8, 9.7, 49.7, 8581.0, 553.6, 13.14, 727.0, 88.1, 3.82),
    // W 360
    ("W 360 x 32,9", 32.9, 349.0, 127.0, 5.8, 8.5, 42.1, 8358.0, 479.0, 14.09, 291.0, 45.9, 2.63),
    ("W 360 x 39,0", 39.0, 353.0, 128.0, 6.5, 10.7, 50.2, 10331.0, 585.3, 14.35, 375.0, 58.6, 2.73),
    // W 410
    ("W 410 x 38,8", 38.8, 399.0, 140.0, 6.4, 8.8, 50.3, 12777.0, 640.5, 15.94, 404.0, 57.7, 2.83),
    ("W 410 x 46,1", 46.1, 403.0, 140.0, 7.0, 11.2, 59.2, 15690.0, 778.7, 16.27, 514.0, 73.4, 2.95),
    // W 460
    ("W 460 x 52,0", 52.0, 450.0, 152.0, 7.6, 10.8, 66.6, 21370.0, 949.8, 17.91, 634.0, 83.5, 3.09),
    // W 530
    ("W 530 x 66,0", 66.0, 525.0, 165.0, 8.9, 11.4, 83.6, 34971.0, 1332.2, 20.46, 857.0, 103.9, 3.20),
    // W 610
    ("W 610 x 101,0", 101.0, 603.0, 228.0, 10.5, 14.9, 130.3, 77003.0, 2554.0, 24.31, 2951.0, 258.8, 4.76),
];
