#![cfg(feature = "log")]

use advec_log::Level;

use advec_mem::Vector;

#[test]
fn growth_is_traced_under_the_vector_target() {
    assert!(advec_log::init_with("warn,advec_mem::vec_types=trace"));
    assert!(!advec_log::init_with("error"));
    assert!(advec_log::enabled("advec_mem::vec_types::vector", Level::Trace));
    assert!(!advec_log::enabled("advec_mem::raw_storage", Level::Info));

    let mut vec = Vector::new();
    for i in 0..5u32 {
        vec.push(i).unwrap();
    }
    assert!(vec.reserve(usize::MAX).is_err());
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
}
