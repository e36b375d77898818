//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "域名控制台",
        loading: "加载中...",
        yes: "是",
        no: "否",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "空格",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "选择",
            page: "翻页",
            add: "添加",
            edit: "编辑",
            verify: "验证",
            delete: "删除",
            copy: "复制",
            search: "搜索",
            sort: "排序",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
            submit: "提交",
            cancel: "取消",
            toggle: "切换",
            next_field: "下一字段",
            done: "完成",
            clear: "清空",
        },
    },

    // ========================================================================
    // 域名列表
    // ========================================================================
    table: TableTexts {
        title: "域名",
        add_domain: "添加域名",
        col_domain: "域名地址",
        col_active: "启用状态",
        col_status: "验证状态",
        col_created: "创建时间",
        active: "已启用",
        not_active: "未启用",
        status_pending: "待验证",
        status_verified: "已验证",
        status_rejected: "已拒绝",
        sort_asc: "升序排列",
        sort_desc: "降序排列",
        search: "搜索",
        search_placeholder: "输入以按域名筛选",
        page: "页",
        no_domains: "暂无域名",
        no_matches: "没有匹配的域名",
        deleting: "删除中...",
    },

    // ========================================================================
    // 侧边面板
    // ========================================================================
    drawer: DrawerTexts {
        add_title: "添加域名",
        edit_title: "编辑域名",
        domain_label: "域名地址",
        domain_placeholder: "例如：https://google.com",
        active_label: "启用状态",
        add_button: "添加",
        update_button: "更新",
        cancel_button: "取消",
        submitting: "保存中...",
        validation: ValidationTexts {
            required: "请输入域名！",
            invalid_pattern: "请输入有效的域名地址！",
        },
    },

    // ========================================================================
    // 通知
    // ========================================================================
    toast: ToastTexts {
        added: "域名添加成功",
        add_failed: "添加域名失败",
        updated: "域名更新成功",
        update_failed: "更新域名失败，请重试。",
        verified: "域名验证成功",
        verify_failed: "验证域名失败，请重试。",
        deleted: "域名删除成功",
        delete_failed: "删除域名失败，请重试。",
        missing_id: "缺少域名 ID",
        copied: "域名已复制到剪贴板",
        load_failed: "加载域名失败",
        copy_failed: "复制域名失败",
    },

    // ========================================================================
    // 状态栏 / 帮助
    // ========================================================================
    status_bar: StatusBarTexts {
        refreshing: "刷新中...",
        records: "条记录",
        busy_deleting: "正在删除中",
    },

    help: HelpTexts {
        title: "快捷键",
        list_section: "域名列表",
        drawer_section: "添加 / 编辑面板",
        close_hint: "按 Esc 或 ? 关闭",
    },
};
