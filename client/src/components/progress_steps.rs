//! Four-stage "what happens next" illustration.

#[cfg(test)]
#[path = "progress_steps_test.rs"]
mod progress_steps_test;

use leptos::prelude::*;
use storefront::content::{PROGRESS_STEPS, ProgressStep};

use crate::util::icons;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

impl StepStatus {
    #[must_use]
    pub fn of(index: usize, active: usize) -> Self {
        match index.cmp(&active) {
            std::cmp::Ordering::Less => Self::Done,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "progress-step progress-step--done",
            Self::Active => "progress-step progress-step--active",
            Self::Pending => "progress-step progress-step--pending",
        }
    }
}

/// Steps paired with their status, always in the fixed stage order.
#[must_use]
pub fn step_rows(active: usize) -> Vec<(ProgressStep, StepStatus)> {
    PROGRESS_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| (*step, StepStatus::of(index, active)))
        .collect()
}

#[component]
pub fn ProgressSteps(active: usize) -> impl IntoView {
    view! {
        <section class="progress-steps">
            <h2 class="progress-steps__title">"What happens next?"</h2>
            <ol class="progress-steps__list">
                {step_rows(active)
                    .into_iter()
                    .enumerate()
                    .map(|(index, (step, status))| {
                        view! {
                            <li class=status.class()>
                                <span class="progress-step__marker" aria-hidden="true">
                                    {icons::glyph(Some(step.icon))}
                                </span>
                                <span class="progress-step__number">{index + 1}</span>
                                <span class="progress-step__title">{step.title}</span>
                                <span class="progress-step__description">{step.description}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
