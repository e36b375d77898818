//! 侧边面板消息处理

use domain_console_core::{FormSubmission, PanelEvent};

use crate::message::{Command, DrawerMessage};
use crate::model::{App, DrawerField, DrawerState};

/// 处理侧边面板消息
pub fn update(app: &mut App, msg: DrawerMessage) {
    match msg {
        DrawerMessage::Close => close(app),
        DrawerMessage::Submit => submit(app),
        other => {
            if let Some(drawer) = app.drawer.as_mut() {
                edit_field(drawer, &other);
            }
        }
    }
}

fn edit_field(drawer: &mut DrawerState, msg: &DrawerMessage) {
    match msg {
        DrawerMessage::Input(c) if drawer.focus == DrawerField::Domain => {
            drawer.form.push_char(*c);
        }
        DrawerMessage::Backspace if drawer.focus == DrawerField::Domain => {
            drawer.form.pop_char();
        }
        DrawerMessage::NextField | DrawerMessage::PreviousField => {
            drawer.focus = drawer.focus.toggle();
        }
        DrawerMessage::ToggleActive => drawer.form.toggle_active(),
        _ => {}
    }
}

/// 关闭面板（幂等）；进行中的请求结果到达时不再影响面板
fn close(app: &mut App) {
    if let Err(e) = app.table.apply(PanelEvent::Close) {
        log::debug!("Ignoring close: {e}");
        return;
    }
    app.drawer = None;
}

/// 校验通过后发出请求；每次提交领取新的凭据，结果按凭据回到发起的面板
fn submit(app: &mut App) {
    let Some(drawer) = app.drawer.as_mut() else {
        return;
    };
    if drawer.is_submitting() {
        return;
    }

    let submission = match drawer.form.submit() {
        Ok(submission) => submission,
        // 错误已记录在表单上，由面板内联显示
        Err(e) => {
            log::debug!("Form rejected: {e}");
            return;
        }
    };

    app.last_ticket += 1;
    let ticket = app.last_ticket;
    drawer.pending = Some(ticket);

    let command = match submission {
        FormSubmission::Create(_) => Command::Create {
            ticket,
            values: drawer.form.values().clone(),
        },
        FormSubmission::Delegate(values) => Command::Update {
            ticket,
            id: drawer.form.record().map(|record| record.id.clone()),
            values,
        },
    };
    app.commands.push(command);
}
