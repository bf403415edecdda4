#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // P3 2x1 with header comments
    let p3 = b"# seed\nP3\n# size\n2 1\n255\n255 0 0 0 255 0\n";
    fs::write(format!("{dir}/p3_2x1.ppm"), p3).unwrap();

    // P6 2x2
    let p6 = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), p6).unwrap();

    // P6 with a small max value
    let p6_low = b"P6\n1 1\n15\n\x0f\x00\x07";
    fs::write(format!("{dir}/p6_maxval15.ppm"), p6_low).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p3_short.bin"), b"P3\n2 1\n255\n1 2 3 4").unwrap();
    fs::write(format!("{dir}/p3_extra.bin"), b"P3\n1 1\n255\n1 2 3 4").unwrap();
    fs::write(format!("{dir}/maxval_300.bin"), b"P3\n1 1\n300\n1 2 3").unwrap();

    println!("Generated seed corpus in {dir}/");
}
