use dioxus::prelude::*;
use phishguard_types::risk::RiskBand;

fn band_color(band: RiskBand) -> &'static str {
    match band {
        RiskBand::High => "#dc2626",
        RiskBand::Medium => "#d97706",
        RiskBand::Low => "#16a34a",
    }
}

/// The 0-100 risk gauge on the detection report.
#[component]
pub fn RiskMeter(score: u8) -> Element {
    let band = RiskBand::from_score(score);
    let color = band_color(band);
    let width = score.min(100);

    rsx! {
        div {
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                strong { "Risk Score" }
                span {
                    style: "font-size: 1.5rem; font-weight: 700; color: {color};",
                    "{score}/100"
                }
            }
            div {
                style: "height: 0.75rem; border-radius: 0.4rem; overflow: hidden;
                        background-color: var(--pico-muted-border-color); margin: 0.5rem 0;",
                div {
                    style: "height: 100%; width: {width}%; background-color: {color};
                            transition: width 0.4s ease;",
                }
            }
            small {
                style: "color: var(--pico-muted-color);",
                "{band.summary()}"
            }
        }
    }
}
