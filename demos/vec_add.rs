//! Offloads a handful of vector additions to the GPU and verifies them.
//!
//! Run with: `cargo run --example vec_add --features opencl`

use cladd::{Result, VectorAdder};

fn verify(left: &[f32], right: &[f32], sum: &[f32]) {
    assert_eq!(sum.len(), left.len());
    for i in 0..left.len() {
        let expected = left[i] + right[i];
        assert!(
            (sum[i] - expected).abs() < 1e-5,
            "mismatch at {}: {} vs {}",
            i,
            sum[i],
            expected
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let kernel = concat!(env!("CARGO_MANIFEST_DIR"), "/kernels/add_kernel.cl");
    let mut adder = VectorAdder::new(kernel)?;
    println!("device: {}", adder.device_name().unwrap_or("unknown"));

    let left = vec![1.0f32, 2.0, 3.0];
    let right = vec![4.0f32, 5.0, 6.0];
    let sum = adder.add(&left, &right)?;
    println!("{:?} + {:?} = {:?}", left, right, sum);
    verify(&left, &right, &sum);

    for len in [1usize, 4, 16, 256, 4096] {
        let left: Vec<f32> = (0..len).map(|i| i as f32 * 0.5).collect();
        let right: Vec<f32> = (0..len).map(|i| (len - i) as f32 * 0.25).collect();
        let sum = adder.add(&left, &right)?;
        verify(&left, &right, &sum);
        println!("len {:>4}: ok", len);
    }

    adder.refresh()?;
    let sum = adder.add(&[0.1, 0.2], &[0.3, 0.4])?;
    verify(&[0.1, 0.2], &[0.3, 0.4], &sum);
    println!("after refresh: {:?}", sum);

    Ok(())
}
