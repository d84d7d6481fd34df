// SPDX-License-Identifier: MPL-2.0
//! Wizard rendering: progress header, the current stage's questions and the
//! navigation row.

use super::review;
use super::state::{Message, State};
use crate::i18n::fluent::I18n;
use crate::questionnaire::{Glossary, Question, QuestionKind};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{
        button, progress_bar, scrollable, text, text_input, tooltip, Column, Container, Row,
        Space, Text,
    },
    Element, Font, Length, Theme,
};

/// Contextual data needed to render the wizard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Render the wizard for the current stage.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stage = ctx.state.current_stage();

    let title = Text::new(ctx.i18n.tr(&stage.title_key())).size(typography::TITLE_LG);
    let description = Text::new(ctx.i18n.tr(&stage.description_key()))
        .size(typography::BODY_LG)
        .style(muted_text);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(progress_header(&ctx))
        .push(title)
        .push(description);

    if ctx.state.is_last_stage() {
        content = content.push(review::view(&ctx));
    }

    content = stage
        .questions
        .iter()
        .fold(content, |column, question| {
            column.push(question_block(&ctx, question))
        })
        .push(navigation_row(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .into()
}

fn progress_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (current, total) = ctx.state.progress();
    let label = Text::new(ctx.i18n.tr_with_args(
        "wizard-progress",
        &[
            ("current", current.to_string().as_str()),
            ("total", total.to_string().as_str()),
        ],
    ))
    .size(typography::CAPTION)
    .style(muted_text);

    let bar = progress_bar(0.0..=1.0, ctx.state.progress_fraction());

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(bar)
        .into()
}

fn question_block<'a>(ctx: &ViewContext<'a>, question: &'a Question) -> Element<'a, Message> {
    let prompt = Text::new(ctx.i18n.tr(&question.prompt_key()))
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let mut header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(prompt);
    if question.required {
        header = header.push(
            Text::new(format!("* {}", ctx.i18n.tr("wizard-required-marker")))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    let help = Text::new(ctx.i18n.tr(&question.help_key()))
        .size(typography::BODY_SM)
        .style(muted_text);

    let mut block = Column::new().spacing(spacing::XS).push(header).push(help);

    if !question.terms.is_empty() {
        block = block.push(terms_row(
            ctx.i18n,
            ctx.state.questionnaire().glossary(),
            question,
        ));
    }

    block.push(answer_input(ctx, question)).into()
}

/// One tooltip target per referenced glossary term.
fn terms_row<'a>(i18n: &I18n, glossary: &Glossary, question: &Question) -> Element<'a, Message> {
    let chinese = i18n.is_chinese();
    let label = Text::new(i18n.tr("wizard-terms-label"))
        .size(typography::CAPTION)
        .style(muted_text);

    question
        .terms
        .iter()
        .filter_map(|id| glossary.get(id))
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(label),
            |row, term| {
                let name = Text::new(term.name(chinese).to_string())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().primary.base.color),
                    });
                row.push(styles::tooltip::term(
                    name,
                    term.heading(chinese),
                    term.definition(chinese).to_string(),
                    tooltip::Position::Top,
                ))
            },
        )
        .into()
}

fn answer_input<'a>(ctx: &ViewContext<'a>, question: &'a Question) -> Element<'a, Message> {
    let answers = ctx.state.answers();
    match &question.kind {
        QuestionKind::SingleChoice { options } => options
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, option| {
                let selected = answers.is_selected(&question.id, option);
                column.push(choice_button(
                    ctx.i18n,
                    question,
                    option,
                    selected,
                    if selected { "◉" } else { "○" },
                    Message::Select {
                        question: question.id.clone(),
                        option: option.clone(),
                    },
                ))
            })
            .into(),
        QuestionKind::MultiChoice {
            options,
            min_selected,
        } => {
            let hint = if *min_selected > 1 {
                ctx.i18n.tr_with_args(
                    "wizard-select-at-least",
                    &[("min", min_selected.to_string().as_str())],
                )
            } else {
                ctx.i18n.tr("wizard-select-multiple")
            };
            options
                .iter()
                .fold(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(hint).size(typography::CAPTION).style(muted_text)),
                    |column, option| {
                        let selected = answers.is_selected(&question.id, option);
                        column.push(choice_button(
                            ctx.i18n,
                            question,
                            option,
                            selected,
                            if selected { "☑" } else { "☐" },
                            Message::Toggle {
                                question: question.id.clone(),
                                option: option.clone(),
                            },
                        ))
                    },
                )
                .into()
        }
        QuestionKind::Text { multiline } => {
            let id = question.id.clone();
            let padding = if *multiline { spacing::SM } else { spacing::XS };
            text_input(
                &ctx.i18n.tr("wizard-text-placeholder"),
                answers.raw_text(&question.id),
            )
            .on_input(move |value| Message::TextChanged {
                question: id.clone(),
                value,
            })
            .padding(padding)
            .size(typography::BODY)
            .width(Length::Fill)
            .into()
        }
        QuestionKind::Number { min, max } => {
            let id = question.id.clone();
            let input = text_input(
                &ctx.i18n.tr("wizard-number-placeholder"),
                answers.raw_text(&question.id),
            )
            .on_input(move |value| Message::NumberChanged {
                question: id.clone(),
                value,
            })
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

            let mut row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(input);
            if let (Some(min), Some(max)) = (min, max) {
                row = row.push(
                    Text::new(ctx.i18n.tr_with_args(
                        "wizard-number-range",
                        &[
                            ("min", min.to_string().as_str()),
                            ("max", max.to_string().as_str()),
                        ],
                    ))
                    .size(typography::CAPTION)
                    .style(muted_text),
                );
            }
            row.into()
        }
    }
}

fn choice_button<'a>(
    i18n: &I18n,
    question: &Question,
    option: &str,
    selected: bool,
    marker: &'static str,
    on_press: Message,
) -> Element<'a, Message> {
    let style: ButtonStyle = if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    let label = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(marker).size(typography::BODY))
        .push(Text::new(i18n.tr(&question.option_key(option))).size(typography::BODY));

    button(label)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .on_press(on_press)
        .into()
}

fn navigation_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(format!("← {}", ctx.i18n.tr("wizard-back-button"))))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press_maybe((!ctx.state.is_first_stage()).then_some(Message::Previous));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(back)
        .push(Space::new().width(Length::Fill));

    if ctx.state.is_last_stage() {
        row = row
            .push(
                button(Text::new(ctx.i18n.tr("wizard-restart-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::danger)
                    .on_press(Message::Restart),
            )
            .push(
                button(Text::new(ctx.i18n.tr("wizard-export-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::unselected)
                    .on_press(Message::Export),
            )
            .push(
                button(Text::new(ctx.i18n.tr("wizard-submit-button")))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::Submit),
            );
    } else {
        row = row.push(
            button(Text::new(format!("{} →", ctx.i18n.tr("wizard-next-button"))))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::Next),
        );
    }

    row.into()
}

pub(super) fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
