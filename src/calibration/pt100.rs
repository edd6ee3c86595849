//! Pt100 resistance table, 0 °C to 500 °C in 1 °C steps.
//!
//! Resistance in ohms, temperature in degrees Celsius.

pub static PT100: [(f32, f32); 501] = [
    (100.0, 0.0), (100.39, 1.0), (100.78, 2.0), (101.17, 3.0), (101.56, 4.0),
    (101.95, 5.0), (102.34, 6.0), (102.73, 7.0), (103.12, 8.0), (103.51, 9.0),
    (103.9, 10.0), (104.29, 11.0), (104.68, 12.0), (105.07, 13.0), (105.46, 14.0),
    (105.85, 15.0), (106.24, 16.0), (106.63, 17.0), (107.02, 18.0), (107.4, 19.0),
    (107.79, 20.0), (108.18, 21.0), (108.57, 22.0), (108.96, 23.0), (109.35, 24.0),
    (109.73, 25.0), (110.12, 26.0), (110.51, 27.0), (110.9, 28.0), (111.28, 29.0),
    (111.67, 30.0), (112.06, 31.0), (112.45, 32.0), (112.83, 33.0), (113.22, 34.0),
    (113.61, 35.0), (113.99, 36.0), (114.38, 37.0), (114.77, 38.0), (115.15, 39.0),
    (115.54, 40.0), (115.93, 41.0), (116.31, 42.0), (116.7, 43.0), (117.08, 44.0),
    (117.47, 45.0), (117.85, 46.0), (118.24, 47.0), (118.62, 48.0), (119.01, 49.0),
    (119.4, 50.0), (119.78, 51.0), (120.16, 52.0), (120.55, 53.0), (120.93, 54.0),
    (121.32, 55.0), (121.7, 56.0), (122.09, 57.0), (122.47, 58.0), (122.86, 59.0),
    (123.24, 60.0), (123.62, 61.0), (124.01, 62.0), (124.39, 63.0), (124.77, 64.0),
    (125.17, 65.0), (125.55, 66.0), (125.93, 67.0), (126.32, 68.0), (126.7, 69.0),
    (127.08, 70.0), (127.46, 71.0), (127.85, 72.0), (128.23, 73.0), (128.61, 74.0),
    (128.99, 75.0), (129.38, 76.0), (129.76, 77.0), (130.14, 78.0), (130.52, 79.0),
    (130.9, 80.0), (131.28, 81.0), (131.67, 82.0), (132.05, 83.0), (132.43, 84.0),
    (132.81, 85.0), (133.19, 86.0), (133.57, 87.0), (133.95, 88.0), (134.33, 89.0),
    (134.71, 90.0), (135.09, 91.0), (135.47, 92.0), (135.85, 93.0), (136.23, 94.0),
    (136.61, 95.0), (136.99, 96.0), (137.37, 97.0), (137.75, 98.0), (138.13, 99.0),
    (138.51, 100.0), (138.89, 101.0), (139.27, 102.0), (139.65, 103.0), (140.03, 104.0),
    (140.39, 105.0), (140.77, 106.0), (141.15, 107.0), (141.53, 108.0), (141.91, 109.0),
    (142.29, 110.0), (142.66, 111.0), (143.04, 112.0), (143.42, 113.0), (143.8, 114.0),
    (144.18, 115.0), (144.56, 116.0), (144.94, 117.0), (145.32, 118.0), (145.69, 119.0),
    (146.07, 120.0), (146.45, 121.0), (146.82, 122.0), (147.2, 123.0), (147.58, 124.0),
    (147.95, 125.0), (148.33, 126.0), (148.71, 127.0), (149.08, 128.0), (149.46, 129.0),
    (149.83, 130.0), (150.21, 131.0), (150.58, 132.0), (150.96, 133.0), (151.34, 134.0),
    (151.71, 135.0), (152.09, 136.0), (152.46, 137.0), (152.84, 138.0), (153.21, 139.0),
    (153.58, 140.0), (153.95, 141.0), (154.32, 142.0), (154.71, 143.0), (155.08, 144.0),
    (155.46, 145.0), (155.83, 146.0), (156.21, 147.0), (156.58, 148.0), (156.96, 149.0),
    (157.33, 150.0), (157.71, 151.0), (158.08, 152.0), (158.45, 153.0), (158.83, 154.0),
    (159.2, 155.0), (159.56, 156.0), (159.94, 157.0), (160.31, 158.0), (160.68, 159.0),
    (161.05, 160.0), (161.43, 161.0), (161.8, 162.0), (162.17, 163.0), (162.54, 164.0),
    (162.91, 165.0), (163.28, 166.0), (163.66, 167.0), (164.03, 168.0), (164.4, 169.0),
    (164.77, 170.0), (165.14, 171.0), (165.51, 172.0), (165.88, 173.0), (166.25, 174.0),
    (166.62, 175.0), (167.0, 176.0), (167.37, 177.0), (167.74, 178.0), (168.11, 179.0),
    (168.48, 180.0), (168.85, 181.0), (169.22, 182.0), (169.59, 183.0), (169.96, 184.0),
    (170.33, 185.0), (170.69, 186.0), (171.06, 187.0), (171.43, 188.0), (171.8, 189.0),
    (172.17, 190.0), (172.54, 191.0), (172.91, 192.0), (173.27, 193.0), (173.64, 194.0),
    (174.01, 195.0), (174.39, 196.0), (174.75, 197.0), (175.12, 198.0), (175.49, 199.0),
    (175.86, 200.0), (176.23, 201.0), (176.59, 202.0), (176.96, 203.0), (177.33, 204.0),
    (177.7, 205.0), (178.06, 206.0), (178.43, 207.0), (178.8, 208.0), (179.16, 209.0),
    (179.53, 210.0), (179.9, 211.0), (180.26, 212.0), (180.63, 213.0), (180.99, 214.0),
    (181.36, 215.0), (181.73, 216.0), (182.09, 217.0), (182.46, 218.0), (182.82, 219.0),
    (183.19, 220.0), (183.55, 221.0), (183.92, 222.0), (184.28, 223.0), (184.65, 224.0),
    (185.01, 225.0), (185.38, 226.0), (185.74, 227.0), (186.11, 228.0), (186.47, 229.0),
    (186.84, 230.0), (187.2, 231.0), (187.56, 232.0), (187.93, 233.0), (188.29, 234.0),
    (188.65, 235.0), (189.02, 236.0), (189.38, 237.0), (189.74, 238.0), (190.11, 239.0),
    (190.47, 240.0), (190.83, 241.0), (191.2, 242.0), (191.56, 243.0), (191.92, 244.0),
    (192.28, 245.0), (192.66, 246.0), (193.02, 247.0), (193.38, 248.0), (193.74, 249.0),
    (194.1, 250.0), (194.47, 251.0), (194.83, 252.0), (195.19, 253.0), (195.55, 254.0),
    (195.9, 255.0), (196.26, 256.0), (196.62, 257.0), (196.98, 258.0), (197.35, 259.0),
    (197.71, 260.0), (198.07, 261.0), (198.43, 262.0), (198.79, 263.0), (199.15, 264.0),
    (199.51, 265.0), (199.87, 266.0), (200.23, 267.0), (200.59, 268.0), (200.95, 269.0),
    (201.31, 270.0), (201.67, 271.0), (202.03, 272.0), (202.38, 273.0), (202.74, 274.0),
    (203.1, 275.0), (203.46, 276.0), (203.82, 277.0), (204.18, 278.0), (204.54, 279.0),
    (204.9, 280.0), (205.25, 281.0), (205.61, 282.0), (205.97, 283.0), (206.33, 284.0),
    (206.7, 285.0), (207.05, 286.0), (207.41, 287.0), (207.77, 288.0), (208.13, 289.0),
    (208.48, 290.0), (208.84, 291.0), (209.2, 292.0), (209.55, 293.0), (209.91, 294.0),
    (210.27, 295.0), (210.62, 296.0), (210.98, 297.0), (211.34, 298.0), (211.69, 299.0),
    (212.05, 300.0), (212.4, 301.0), (212.76, 302.0), (213.12, 303.0), (213.47, 304.0),
    (213.83, 305.0), (214.19, 306.0), (214.55, 307.0), (214.9, 308.0), (215.26, 309.0),
    (215.61, 310.0), (215.97, 311.0), (216.32, 312.0), (216.68, 313.0), (217.03, 314.0),
    (217.39, 315.0), (217.73, 316.0), (218.08, 317.0), (218.44, 318.0), (218.79, 319.0),
    (219.15, 320.0), (219.5, 321.0), (219.85, 322.0), (220.21, 323.0), (220.56, 324.0),
    (220.91, 325.0), (221.27, 326.0), (221.62, 327.0), (221.97, 328.0), (222.32, 329.0),
    (222.68, 330.0), (223.03, 331.0), (223.38, 332.0), (223.73, 333.0), (224.09, 334.0),
    (224.45, 335.0), (224.8, 336.0), (225.15, 337.0), (225.5, 338.0), (225.85, 339.0),
    (226.21, 340.0), (226.56, 341.0), (226.91, 342.0), (227.26, 343.0), (227.61, 344.0),
    (227.96, 345.0), (228.31, 346.0), (228.66, 347.0), (229.01, 348.0), (229.36, 349.0),
    (229.72, 350.0), (230.07, 351.0), (230.42, 352.0), (230.77, 353.0), (231.12, 354.0),
    (231.47, 355.0), (231.81, 356.0), (232.16, 357.0), (232.51, 358.0), (232.86, 359.0),
    (233.21, 360.0), (233.56, 361.0), (233.91, 362.0), (234.26, 363.0), (234.6, 364.0),
    (234.95, 365.0), (235.3, 366.0), (235.65, 367.0), (236.0, 368.0), (236.35, 369.0),
    (236.7, 370.0), (237.05, 371.0), (237.4, 372.0), (237.75, 373.0), (238.09, 374.0),
    (238.44, 375.0), (238.79, 376.0), (239.14, 377.0), (239.48, 378.0), (239.83, 379.0),
    (240.18, 380.0), (240.52, 381.0), (240.87, 382.0), (241.22, 383.0), (241.56, 384.0),
    (241.91, 385.0), (242.25, 386.0), (242.6, 387.0), (242.95, 388.0), (243.29, 389.0),
    (243.64, 390.0), (243.98, 391.0), (244.33, 392.0), (244.67, 393.0), (245.02, 394.0),
    (245.36, 395.0), (245.71, 396.0), (246.05, 397.0), (246.4, 398.0), (246.74, 399.0),
    (247.09, 400.0), (247.43, 401.0), (247.78, 402.0), (248.12, 403.0), (248.46, 404.0),
    (248.81, 405.0), (249.15, 406.0), (249.5, 407.0), (249.84, 408.0), (250.18, 409.0),
    (250.53, 410.0), (250.89, 411.0), (251.21, 412.0), (251.55, 413.0), (251.9, 414.0),
    (252.24, 415.0), (252.59, 416.0), (252.94, 417.0), (253.28, 418.0), (253.62, 419.0),
    (253.96, 420.0), (254.3, 421.0), (254.65, 422.0), (254.99, 423.0), (255.33, 424.0),
    (255.67, 425.0), (256.01, 426.0), (256.35, 427.0), (256.7, 428.0), (257.04, 429.0),
    (257.38, 430.0), (257.72, 431.0), (258.06, 432.0), (258.4, 433.0), (258.74, 434.0),
    (259.08, 435.0), (259.42, 436.0), (259.76, 437.0), (260.1, 438.0), (260.44, 439.0),
    (260.78, 440.0), (261.12, 441.0), (261.46, 442.0), (261.8, 443.0), (262.14, 444.0),
    (262.48, 445.0), (262.83, 446.0), (263.17, 447.0), (263.5, 448.0), (263.84, 449.0),
    (264.18, 450.0), (264.52, 451.0), (264.86, 452.0), (265.2, 453.0), (265.54, 454.0),
    (265.87, 455.0), (266.21, 456.0), (266.55, 457.0), (266.89, 458.0), (267.22, 459.0),
    (267.56, 460.0), (267.9, 461.0), (268.24, 462.0), (268.57, 463.0), (268.91, 464.0),
    (269.25, 465.0), (269.58, 466.0), (269.92, 467.0), (270.26, 468.0), (270.59, 469.0),
    (270.93, 470.0), (271.27, 471.0), (271.6, 472.0), (271.94, 473.0), (272.27, 474.0),
    (272.61, 475.0), (272.95, 476.0), (273.28, 477.0), (273.62, 478.0), (273.95, 479.0),
    (274.29, 480.0), (274.62, 481.0), (274.96, 482.0), (275.29, 483.0), (275.63, 484.0),
    (275.96, 485.0), (276.31, 486.0), (276.64, 487.0), (276.97, 488.0), (277.31, 489.0),
    (277.64, 490.0), (277.98, 491.0), (278.31, 492.0), (278.64, 493.0), (278.98, 494.0),
    (279.31, 495.0), (279.64, 496.0), (279.98, 497.0), (280.31, 498.0), (280.64, 499.0),
    (280.98, 500.0),
];
