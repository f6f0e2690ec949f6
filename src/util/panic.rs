/// Asserts that the provided block panics, catching the panic so that the test can continue.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
    };
}

pub(crate) use assert_panics;
