//! Prompt模板目录
//!
//! 每个独立段落对应一条模板，模板中的`{Field}`占位符在派发前
//! 按上下文快照解析。目录加载一次后只读共享。

use regex::Regex;
use std::collections::HashMap;

use crate::generator::decisions::Decisions;
use crate::generator::sections;

const INTRODUCTION_TPL: &str = "اكتب مقدمة رسمية لكراسة الشروط والمواصفات الخاصة بمنافسة {Project_Name}.\n\
تصدر الكراسة بتاريخ {Issue_Date}.\n\
المطلوب فقرة واحدة رسمية تعرف بالمنافسة والغرض منها، بدون عناوين فرعية وبدون أقواس.";

const SCOPE_OF_WORK_TPL: &str = "اكتب بند نطاق الأعمال لمنافسة {Project_Name}.\n\
تفاصيل النطاق المدخلة: {Scope_Details}\n\
تاريخ بدء الأعمال المتوقع: {Commencement_of_Work}\n\
المطلوب وصف واضح للأعمال المطلوبة ومخرجاتها في فقرات مرقمة، بدون أقواس.";

const GENERAL_CONDITIONS_TPL: &str = "اكتب بند الشروط العامة لكراسة شروط منافسة {Project_Name}.\n\
آخر موعد لتقديم العروض: {Submission_of_Proposals}\n\
موعد فتح العروض: {Opening_of_Proposals}\n\
المطلوب شروط عامة معتادة في المنافسات الحكومية تشمل الالتزام بالمواعيد وصلاحية العروض وسرية المعلومات، في بنود مرقمة بدون أقواس.";

const SPECIAL_CONDITIONS_TPL: &str = "اكتب بند الشروط الخاصة لمنافسة {Project_Name}.\n\
تفاصيل النطاق المدخلة: {Scope_Details}\n\
المطلوب شروط خاصة مشتقة من طبيعة الأعمال أعلاه، في بنود مرقمة بدون أقواس.";

const TECHNICAL_PROPOSAL_TPL: &str = "اكتب بند وثائق العرض الفني لمنافسة {Project_Name}.\n\
تفاصيل النطاق المدخلة: {Scope_Details}\n\
المطلوب قائمة مرقمة بالوثائق والمستندات الفنية التي يجب على المتنافس تقديمها، بدون أقواس.";

const FINANCIAL_PROPOSAL_TPL: &str = "اكتب بند وثائق العرض المالي لمنافسة {Project_Name}.\n\
المطلوب قائمة مرقمة بالوثائق والجداول المالية التي يجب على المتنافس تقديمها مع طريقة تسعير واضحة، بدون أقواس.";

const PENALTIES_TPL: &str = "اكتب بند الغرامات والمخالفات لمنافسة {Project_Name}.\n\
مدخلات الجهة عن الغرامات:\n\
الحسم: {Penalty_Deduction}\n\
التنفيذ على حساب المتعهد: {Penalty_Execute_On_Vendor}\n\
التعليق: {Penalty_Suspend}\n\
الإنهاء: {Penalty_Termination}\n\
المطلوب صياغة بنود الغرامات اعتمادا على المدخلات أعلاه، وما كان منها فارغا فاكتب له صياغة معتادة، في بنود مرقمة بدون أقواس.";

/// 模板目录：段落名 -> prompt模板
pub struct TemplateCatalog {
    templates: HashMap<&'static str, &'static str>,
    placeholder: Regex,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::preset()
    }
}

impl TemplateCatalog {
    /// 内置模板目录：覆盖全部独立生成段落
    pub fn preset() -> Self {
        let templates = HashMap::from([
            (sections::INTRODUCTION, INTRODUCTION_TPL),
            (sections::SCOPE_OF_WORK, SCOPE_OF_WORK_TPL),
            (sections::GENERAL_CONDITIONS, GENERAL_CONDITIONS_TPL),
            (sections::SPECIAL_CONDITIONS, SPECIAL_CONDITIONS_TPL),
            (sections::TECHNICAL_PROPOSAL_DOCUMENTS, TECHNICAL_PROPOSAL_TPL),
            (sections::FINANCIAL_PROPOSAL_DOCUMENTS, FINANCIAL_PROPOSAL_TPL),
            (sections::PENALTIES_AND_VIOLATIONS, PENALTIES_TPL),
        ]);
        Self::with_templates(templates)
    }

    /// 空目录，配合insert构造自定义目录
    pub fn empty() -> Self {
        Self::with_templates(HashMap::new())
    }

    fn with_templates(templates: HashMap<&'static str, &'static str>) -> Self {
        let placeholder = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
        Self {
            templates,
            placeholder,
        }
    }

    pub fn insert(&mut self, section: &'static str, template: &'static str) {
        self.templates.insert(section, template);
    }

    pub fn get(&self, section: &str) -> Option<&'static str> {
        self.templates.get(section).copied()
    }

    /// 将模板解析为最终prompt
    ///
    /// `{Field}`替换为上下文中的字段文本，缺失字段按空串处理。
    pub fn render(&self, template: &str, decisions: &Decisions) -> String {
        self.placeholder
            .replace_all(template, |caps: &regex::Captures| {
                decisions.get_text(&caps[1])
            })
            .into_owned()
    }
}

/// 评标标准的专用prompt
///
/// 不走模板目录：由技术/财务段落的生成结果与Award_Method路由拼装，
/// 必须在独立波次全部合并之后调用。
pub fn build_bid_evaluation_prompt(decisions: &Decisions) -> String {
    let technical = decisions.get_text(sections::TECHNICAL_PROPOSAL_DOCUMENTS);
    let financial = decisions.get_text(sections::FINANCIAL_PROPOSAL_DOCUMENTS);
    let award_method = decisions.get_text(sections::AWARD_METHOD);

    format!(
        "تحليل المحتوى التالي لاستخراج عناصر التقييم:\n\n\
العرض الفني:\n{technical}\n\n\
العرض المالي:\n{financial}\n\n\
المطلوب:\n\n\
إنشاء نموذج معايير تقييم العروض جاهز للإدراج في كراسة الشروط.\n\n\
التوجيهات:\n\n\
أولا تقسيم المعايير إلى مستويين فقط:\n\
- المستوى الأول: تقييم فني\n\
- المستوى الثاني: تقييم مالي\n\n\
ثانيا استخراج عناصر التقييم من محتوى العرض الفني والمالي أعلاه، وليس من خيالك.\n\
لا تتجاوز خمسة عناصر فنية وعنصرين ماليين.\n\n\
ثالثا توزيع النقاط يتم حسب طريقة الترسية الموضحة في الإدخال Award_Method:{award_method}\n\n\
- إذا كانت الترسية تعتمد على أفضل عرض فني فقط Best Technical Offer فليكن التركيز الأكبر للنقاط في الجانب الفني مع حصة بسيطة للمالي\n\
- إذا كانت Best Value فيجب توزيع النقاط بشكل متوازن بين الفني والمالي\n\
- إذا كانت Lowest Price فيكون الجانب المالي هو الأعلى وزنا ويكون الفني داعما\n\n\
رابعا إخراج النتيجة في جدول فقط يحتوي الأعمدة:\n\
المستوى الأول | المستوى الثاني | الوزن | النقاط\n\n\
خامسا يمنع كتابة شرح أو فقرات أو تعريفات. الجدول فقط.\n\n\
سادسا مهم جدا:\n\
يمنع استخدام الأقواس بجميع أنواعها سواء كانت دائرية أو مربعة أو معقوفة.\n\
اكتب النص بدون أي أقواس.\n\n\
أخيرا اختم بجملة رسمية:\n\
يتم ترسية المنافسة على العرض الحاصل على أعلى مجموع نقاط بعد التقييم الفني والمالي."
    )
}
