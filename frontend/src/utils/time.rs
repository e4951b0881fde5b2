use chrono::{Local, Timelike};

pub fn current_local_hour() -> u32 {
    Local::now().hour()
}
