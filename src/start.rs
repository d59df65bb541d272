use core::ptr;

unsafe extern "C" {
    static mut _sbss: u32;
    static mut _ebss: u32;

    fn main() -> !;
}

/// Clears `.bss` and enters `main`. Called from `_entry` once the stack is set up.
///
/// # Safety
/// Must only be called once, by `_entry`, before any static is touched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn start() -> ! {
    unsafe {
        let mut bss = ptr::addr_of_mut!(_sbss);
        let end = ptr::addr_of_mut!(_ebss);

        while bss < end {
            ptr::write_volatile(bss, 0);
            bss = bss.add(1);
        }

        main()
    }
}
