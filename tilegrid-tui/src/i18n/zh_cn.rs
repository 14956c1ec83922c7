//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, DetailTexts, GridTexts, HelpTexts, HintTexts, KeyNames, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "tilegrid",
        error: "错误",
    },
    hints: HintTexts {
        keys: KeyNames {
            arrows: "↑↓←→",
            vim: "hjkl",
            enter: "Enter",
            esc: "Esc",
            backspace: "Backspace",
            ctrl_c: "Ctrl+C",
            q: "q",
            question: "?",
        },
        move_focus: "移动",
        select: "详情",
        close: "关闭",
        help: "帮助",
        quit: "退出",
    },
    grid: GridTexts {
        title: "浏览",
        loading_catalog: "正在加载目录…",
        catalog_failed: "目录加载失败。",
        no_rows: "目录中没有任何行。",
        row_pending: "…",
        row_loading: "加载中…",
        row_failed: "该行加载失败。",
        row_empty: "暂无内容。",
        no_image: "无图片",
    },
    detail: DetailTexts {
        release_date: "发行日期",
        rating: "分级",
        content_type: "内容类型",
        reference_id: "引用 ID",
        image: "图片",
        no_image: "无",
    },
    help: HelpTexts {
        title: "快捷键",
        move_focus: "在瓦片与行之间移动",
        open_details: "打开瓦片详情",
        close_details: "关闭详情",
        toggle_help: "显示或隐藏帮助",
        quit: "退出",
    },
    status: StatusTexts {
        rows_loaded: "行",
        listing_failed: "目录不可用",
        row_failed: "加载失败",
        config_ignored: "配置已忽略",
    },
};
