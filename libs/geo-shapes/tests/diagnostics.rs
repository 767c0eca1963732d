use std::io;
use std::sync::{Arc, Mutex};

use geo_shapes::{Sphere, Triangle};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn take(&self) -> String {
        let mut buf = self.0.lock().unwrap();
        String::from_utf8(std::mem::take(&mut *buf)).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// Single test so no other thread touches the callsites while the subscriber is scoped.
#[test]
fn emits_diagnostics_for_clamped_and_rejected_input() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        // Rounded collinear sides are clamped quietly
        assert_eq!(Triangle::new(2.2, 132.7, 134.9).area(), 0.0);
        assert_eq!(captured.take(), "");

        assert_eq!(Triangle::new(1.0, 1.0, 10.0).area(), 0.0);
        let warned = captured.take();
        assert!(warned.contains("WARN"), "{warned}");
        assert!(warned.contains("negative Heron radicand clamped to zero"), "{warned}");
        assert!(warned.contains("c=10.0"), "{warned}");
        assert!(warned.contains("radicand=-600.0"), "{warned}");

        assert!(Sphere::try_new(-1.0).is_err());
        let rejected = captured.take();
        assert!(rejected.contains("DEBUG"), "{rejected}");
        assert!(rejected.contains("rejected dimension"), "{rejected}");
        assert!(rejected.contains("Sphere"), "{rejected}");
        assert!(rejected.contains("radius"), "{rejected}");
        assert!(rejected.contains("value=-1.0"), "{rejected}");

        assert!(Triangle::try_new(1.0, 1.0, 10.0).is_err());
        let violated = captured.take();
        assert!(violated.contains("sides violate the triangle inequality"), "{violated}");
    });
}
