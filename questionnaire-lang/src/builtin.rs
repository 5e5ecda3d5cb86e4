use crate::MessageKey;

pub(crate) const EN_US: [(MessageKey, &str); 7] = [
    (MessageKey::Submit, "Submit"),
    (MessageKey::Next, "Next"),
    (MessageKey::Back, "Back"),
    (MessageKey::Loading, "Loading..."),
    (MessageKey::Input, "Please input"),
    (MessageKey::Required, "This field is required"),
    (
        MessageKey::CheckboxOutOfRange,
        "Please select at least %d and at most %d option(s)",
    ),
];

pub(crate) const ZH_CN: [(MessageKey, &str); 7] = [
    (MessageKey::Submit, "提交"),
    (MessageKey::Next, "继续"),
    (MessageKey::Back, "返回"),
    (MessageKey::Loading, "加载中..."),
    (MessageKey::Input, "请输入"),
    (MessageKey::Required, "此字段不能为空"),
    (MessageKey::CheckboxOutOfRange, "请选择 %d 到 %d 个选项"),
];
