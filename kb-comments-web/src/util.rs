use std::str::FromStr;

use kb_comments_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|_| {
            tracing::warn!(%name, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Absolute time, as shown in the tooltip of relative times
pub fn format_absolute(t: &Time) -> String {
    t.with_timezone(&local_tz())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn time_ago(now: Time, then: Time) -> String {
    let secs = (now - then).num_seconds();
    if secs < 45 {
        return String::from("just now");
    }
    let (n, unit) = match secs {
        s if s < 60 * 60 - 30 => ((s + 30) / 60, "minute"),
        s if s < 60 * 60 * 24 => ((s / (60 * 60)).max(1), "hour"),
        s if s < 60 * 60 * 24 * 30 => (s / (60 * 60 * 24), "day"),
        s if s < 60 * 60 * 24 * 365 => (s / (60 * 60 * 24 * 30), "month"),
        s => (s / (60 * 60 * 24 * 365), "year"),
    };
    match n {
        1 => format!("1 {unit} ago"),
        n => format!("{n} {unit}s ago"),
    }
}
