/// Source of wall-clock time in whole Unix seconds
pub trait Clock {
    fn now(&self) -> i64;
}

/// Real system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

#[cfg(test)]
pub mod testing {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Manually advanced clock; clones share the same time
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock(Rc<Cell<i64>>);

    impl ManualClock {
        pub fn at(start: i64) -> Self {
            Self(Rc::new(Cell::new(start)))
        }

        pub fn advance(&self, seconds: i64) {
            self.0.set(self.0.get() + seconds);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> i64 {
            self.0.get()
        }
    }
}
