//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DrawerTexts, HelpTexts, HintTexts, KeyNames, StatusBarTexts,
    TableTexts, ToastTexts, Translations, ValidationTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Domain Console",
        loading: "Loading...",
        yes: "Yes",
        no: "No",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "Select",
            page: "Page",
            add: "Add",
            edit: "Edit",
            verify: "Verify",
            delete: "Delete",
            copy: "Copy",
            search: "Search",
            sort: "Sort",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
            submit: "Submit",
            cancel: "Cancel",
            toggle: "Toggle",
            next_field: "Next field",
            done: "Done",
            clear: "Clear",
        },
    },

    // ========================================================================
    // 域名列表
    // ========================================================================
    table: TableTexts {
        title: "Domains",
        add_domain: "Add Domain",
        col_domain: "Domain URL",
        col_active: "Active Status",
        col_status: "Verification status",
        col_created: "Created",
        active: "Active",
        not_active: "Not Active",
        status_pending: "Pending",
        status_verified: "Verified",
        status_rejected: "Rejected",
        sort_asc: "Order by Ascending",
        sort_desc: "Order by Descending",
        search: "Search",
        search_placeholder: "Type to filter by domain",
        page: "Page",
        no_domains: "No domains yet",
        no_matches: "No domains match the search",
        deleting: "deleting...",
    },

    // ========================================================================
    // 侧边面板
    // ========================================================================
    drawer: DrawerTexts {
        add_title: "Add domain",
        edit_title: "Edit domain",
        domain_label: "Domain URL",
        domain_placeholder: "Ex: https://google.com",
        active_label: "Active Status",
        add_button: "Add",
        update_button: "Update",
        cancel_button: "Cancel",
        submitting: "Saving...",
        validation: ValidationTexts {
            required: "Please input the domain!",
            invalid_pattern: "Please enter a valid domain URL!",
        },
    },

    // ========================================================================
    // 通知
    // ========================================================================
    toast: ToastTexts {
        added: "Domain added successfully",
        add_failed: "Failed to add domain",
        updated: "Domain updated successfully",
        update_failed: "Failed to update domain. Please try again.",
        verified: "Domain verified successfully",
        verify_failed: "Failed to verify domain. Please try again.",
        deleted: "Domain deleted successfully",
        delete_failed: "Failed to delete domain. Please try again.",
        missing_id: "Domain ID is missing",
        copied: "Domain copied to clipboard",
        load_failed: "Failed to load domains",
        copy_failed: "Failed to copy domain",
    },

    // ========================================================================
    // 状态栏 / 帮助
    // ========================================================================
    status_bar: StatusBarTexts {
        refreshing: "Refreshing...",
        records: "records",
        busy_deleting: "A delete is in progress",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        list_section: "Domain list",
        drawer_section: "Add / edit panel",
        close_hint: "Press Esc or ? to close",
    },
};
