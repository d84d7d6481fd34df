// SPDX-License-Identifier: MPL-2.0
//! Summary shown on the final stage: every earlier stage with its answers
//! and an edit button, plus the count of required questions still open.

use super::state::Message;
use super::view::{muted_text, ViewContext};
use crate::i18n::fluent::I18n;
use crate::questionnaire::{Answer, Question};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Element, Font, Length, Theme,
};

/// Human-readable rendering of an answer in the active language.
pub fn display_answer(i18n: &I18n, question: &Question, answer: &Answer) -> String {
    match answer {
        Answer::Choice(option) => i18n.tr(&question.option_key(option)),
        Answer::Choices(options) => options
            .iter()
            .map(|option| i18n.tr(&question.option_key(option)))
            .collect::<Vec<_>>()
            .join(", "),
        Answer::Text(value) | Answer::Number(value) => value.trim().to_string(),
    }
}

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let questionnaire = ctx.state.questionnaire();
    let answers = ctx.state.answers();
    let last = questionnaire.stage_count().saturating_sub(1);

    let title = Text::new(ctx.i18n.tr("review-summary-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut summary = Column::new().spacing(spacing::SM).push(title);

    for (index, stage) in questionnaire.stages().iter().enumerate().take(last) {
        let edit = button(Text::new(ctx.i18n.tr("wizard-edit-button")).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected)
            .on_press_maybe(ctx.state.is_visited(index).then_some(Message::JumpTo(index)));

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr(&stage.title_key())).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(edit);

        let rows = stage.questions.iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, question| match answers.get(&question.id).filter(|a| !a.is_blank()) {
                Some(answer) => column.push(answer_row(
                    ctx.i18n.tr(&question.prompt_key()),
                    display_answer(ctx.i18n, question, answer),
                    false,
                )),
                None if question.required => column.push(answer_row(
                    ctx.i18n.tr(&question.prompt_key()),
                    ctx.i18n.tr("review-no-answer"),
                    true,
                )),
                None => column,
            },
        );

        summary = summary.push(
            Container::new(Column::new().spacing(spacing::XS).push(header).push(rows))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel),
        );
    }

    let missing = ctx.state.missing_required();
    let status = if missing == 0 {
        Text::new(ctx.i18n.tr("review-complete")).style(|_theme: &Theme| text::Style {
            color: Some(palette::SUCCESS_500),
        })
    } else {
        Text::new(ctx.i18n.tr_with_args(
            "review-missing-count",
            &[("count", missing.to_string().as_str())],
        ))
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WARNING_500),
        })
    };

    summary
        .push(container(status.size(typography::BODY)).padding([spacing::XXS, 0.0]))
        .into()
}

fn answer_row<'a>(prompt: String, value: String, missing: bool) -> Element<'a, Message> {
    let value = Text::new(value).size(typography::BODY_SM);
    let value = if missing {
        value.style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
    } else {
        value
    };

    Column::new()
        .push(Text::new(prompt).size(typography::CAPTION).style(muted_text))
        .push(value)
        .into()
}
