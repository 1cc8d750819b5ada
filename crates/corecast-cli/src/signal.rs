use nix::sys::signal::{self, SigHandler, Signal};

const INTERRUPT_NOTICE: &[u8] = b"\n\n\xF0\x9F\x91\x8B Interrupted by user. Exiting...\n";

extern "C" fn on_interrupt(_: libc::c_int) {
    // Only async-signal-safe calls here.
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            INTERRUPT_NOTICE.as_ptr().cast(),
            INTERRUPT_NOTICE.len(),
        );
        libc::_exit(0);
    }
}

/// Make Ctrl-C a clean exit with status 0, even while blocked on stdin or
/// on a generation request.
pub fn exit_cleanly_on_interrupt() -> nix::Result<()> {
    unsafe { signal::signal(Signal::SIGINT, SigHandler::Handler(on_interrupt)) }?;
    Ok(())
}
