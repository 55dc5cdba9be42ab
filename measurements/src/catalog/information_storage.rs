unit_family! {
    /// Units of information, based on bits. Decimal prefixes step by 1000, binary ones by 1024.
    UnitInformationStorage => InformationStorage, base: BITS;

    BITS = "bits", "bit", linear(1.0), tag: "digital-bit";
    NIBBLES = "nibbles", "nibble", linear(4.0);
    BYTES = "bytes", "B", linear(8.0), tag: "digital-byte";

    KILOBITS = "kilobits", "kbit", linear(1e3), tag: "digital-kilobit";
    MEGABITS = "megabits", "Mbit", linear(1e6), tag: "digital-megabit";
    GIGABITS = "gigabits", "Gbit", linear(1e9), tag: "digital-gigabit";
    TERABITS = "terabits", "Tbit", linear(1e12), tag: "digital-terabit";
    PETABITS = "petabits", "Pbit", linear(1e15);
    EXABITS = "exabits", "Ebit", linear(1e18);
    ZETTABITS = "zettabits", "Zbit", linear(1e21);
    YOTTABITS = "yottabits", "Ybit", linear(1e24);

    KILOBYTES = "kilobytes", "kB", linear(8e3), tag: "digital-kilobyte";
    MEGABYTES = "megabytes", "MB", linear(8e6), tag: "digital-megabyte";
    GIGABYTES = "gigabytes", "GB", linear(8e9), tag: "digital-gigabyte";
    TERABYTES = "terabytes", "TB", linear(8e12), tag: "digital-terabyte";
    PETABYTES = "petabytes", "PB", linear(8e15), tag: "digital-petabyte";
    EXABYTES = "exabytes", "EB", linear(8e18);
    ZETTABYTES = "zettabytes", "ZB", linear(8e21);
    YOTTABYTES = "yottabytes", "YB", linear(8e24);

    KIBIBITS = "kibibits", "Kibit", linear(1024.0);
    MEBIBITS = "mebibits", "Mibit", linear(1_048_576.0);
    GIBIBITS = "gibibits", "Gibit", linear(1_073_741_824.0);
    TEBIBITS = "tebibits", "Tibit", linear(1_099_511_627_776.0);
    PEBIBITS = "pebibits", "Pibit", linear(1_125_899_906_842_624.0);
    EXBIBITS = "exbibits", "Eibit", linear(1_152_921_504_606_846_976.0);
    ZEBIBITS = "zebibits", "Zibit", linear(1_180_591_620_717_411_303_424.0);
    YOBIBITS = "yobibits", "Yibit", linear(1_208_925_819_614_629_174_706_176.0);

    KIBIBYTES = "kibibytes", "KiB", linear(8192.0);
    MEBIBYTES = "mebibytes", "MiB", linear(8_388_608.0);
    GIBIBYTES = "gibibytes", "GiB", linear(8_589_934_592.0);
    TEBIBYTES = "tebibytes", "TiB", linear(8_796_093_022_208.0);
    PEBIBYTES = "pebibytes", "PiB", linear(9_007_199_254_740_992.0);
    EXBIBYTES = "exbibytes", "EiB", linear(9_223_372_036_854_775_808.0);
    ZEBIBYTES = "zebibytes", "ZiB", linear(9_444_732_965_739_290_427_392.0);
    YOBIBYTES = "yobibytes", "YiB", linear(9_671_406_556_917_033_397_649_408.0);
}
