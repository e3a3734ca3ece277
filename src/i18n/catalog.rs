use crate::i18n::{Locale, Message, MessageKey};

pub(super) fn label(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => en_label(key),
        Locale::Zh => zh_label(key),
        Locale::Ja => ja_label(key),
        Locale::Es => es_label(key),
        Locale::Fr => fr_label(key),
    }
}

pub(super) fn template(locale: Locale, message: &Message) -> &'static str {
    match locale {
        Locale::En => en_template(message),
        Locale::Zh => zh_template(message),
        Locale::Ja => ja_template(message),
        Locale::Es => es_template(message),
        Locale::Fr => fr_template(message),
    }
}

fn en_label(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "School Evaluator",
        MessageKey::School1 => "School 1",
        MessageKey::School2 => "School 2",
        MessageKey::Metric => "Metric",
        MessageKey::NetCost => "Net Annual Cost",
        MessageKey::TotalProgramCost => "Total Program Cost",
        MessageKey::EstimatedRoi => "Estimated 5-Year ROI",
        MessageKey::WeightedScore => "Weighted Score",
        MessageKey::Recommendation => "Recommendation",
        MessageKey::BetterFinancially => "Better Financially",
        MessageKey::BetterOverall => "Better Overall",
        MessageKey::Tie => "Tie",
        MessageKey::NotReady => {
            "Enter a name, tuition and program length for both schools to see a comparison."
        }
        MessageKey::Field => "Field",
        MessageKey::Problem => "Problem",
        MessageKey::SchoolName => "School Name",
        MessageKey::Tuition => "Annual Tuition",
        MessageKey::Scholarship => "Annual Scholarship",
        MessageKey::LivingCost => "Annual Living Cost",
        MessageKey::ProgramLength => "Program Length (years)",
        MessageKey::PostGradSalary => "Expected Post-Graduation Salary",
        MessageKey::Reputation => "Reputation",
        MessageKey::Location => "Location",
        MessageKey::ProgramFit => "Program Fit",
    }
}

fn en_template(message: &Message) -> &'static str {
    match message {
        Message::NameRequired => "School name is required",
        Message::MinValue { .. } => "Minimum value is {min}",
        Message::MaxValue { .. } => "Maximum value is {max}",
        Message::NotFinite => "Value must be a finite number",
        Message::RecommendSimilar => {
            "Both schools are very similar in value. Consider personal preferences and specific program details."
        }
        Message::RecommendClearWinner { .. } => {
            "{winner} is the clear winner with both better financial value and overall fit."
        }
        Message::RecommendTradeOff { .. } => {
            "{financial} offers better financial value, but {overall} has a better overall fit. Consider your priorities."
        }
        Message::RecommendFinancialOnly { .. } => {
            "{winner} offers better financial value, while both schools have a similar overall fit. Consider your priorities."
        }
        Message::RecommendOverallOnly { .. } => {
            "{winner} has a better overall fit, while both schools offer similar financial value. Consider your priorities."
        }
    }
}

fn zh_label(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "学校评估器",
        MessageKey::School1 => "学校 1",
        MessageKey::School2 => "学校 2",
        MessageKey::Metric => "指标",
        MessageKey::NetCost => "年净成本",
        MessageKey::TotalProgramCost => "项目总成本",
        MessageKey::EstimatedRoi => "预计五年投资回报率",
        MessageKey::WeightedScore => "加权得分",
        MessageKey::Recommendation => "推荐",
        MessageKey::BetterFinancially => "财务更优",
        MessageKey::BetterOverall => "综合更优",
        MessageKey::Tie => "持平",
        MessageKey::NotReady => "请为两所学校填写名称、学费和项目年限以查看对比。",
        MessageKey::Field => "字段",
        MessageKey::Problem => "问题",
        MessageKey::SchoolName => "学校名称",
        MessageKey::Tuition => "每年学费",
        MessageKey::Scholarship => "每年奖学金",
        MessageKey::LivingCost => "每年生活费",
        MessageKey::ProgramLength => "项目年限（年）",
        MessageKey::PostGradSalary => "毕业后预期年薪",
        MessageKey::Reputation => "声誉",
        MessageKey::Location => "地理位置",
        MessageKey::ProgramFit => "专业匹配度",
    }
}

fn zh_template(message: &Message) -> &'static str {
    match message {
        Message::NameRequired => "学校名称为必填项",
        Message::MinValue { .. } => "最小值为 {min}",
        Message::MaxValue { .. } => "最大值为 {max}",
        Message::NotFinite => "数值必须是有限数字",
        Message::RecommendSimilar => "两所学校的价值非常接近。请结合个人偏好和具体项目细节进行考虑。",
        Message::RecommendClearWinner { .. } => {
            "{winner} 在财务价值和综合匹配度上都更胜一筹，是明确的首选。"
        }
        Message::RecommendTradeOff { .. } => {
            "{financial} 的财务价值更高，但 {overall} 的综合匹配度更好。请权衡您的优先事项。"
        }
        Message::RecommendFinancialOnly { .. } => {
            "{winner} 的财务价值更高，而两所学校的综合匹配度相近。请权衡您的优先事项。"
        }
        Message::RecommendOverallOnly { .. } => {
            "{winner} 的综合匹配度更好，而两所学校的财务价值相近。请权衡您的优先事项。"
        }
    }
}

fn ja_label(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "学校評価ツール",
        MessageKey::School1 => "学校 1",
        MessageKey::School2 => "学校 2",
        MessageKey::Metric => "指標",
        MessageKey::NetCost => "年間実質費用",
        MessageKey::TotalProgramCost => "プログラム総費用",
        MessageKey::EstimatedRoi => "推定5年ROI",
        MessageKey::WeightedScore => "加重スコア",
        MessageKey::Recommendation => "おすすめ",
        MessageKey::BetterFinancially => "費用面で優位",
        MessageKey::BetterOverall => "総合的に優位",
        MessageKey::Tie => "互角",
        MessageKey::NotReady => {
            "両方の学校の名前、授業料、プログラム期間を入力すると比較が表示されます。"
        }
        MessageKey::Field => "項目",
        MessageKey::Problem => "問題",
        MessageKey::SchoolName => "学校名",
        MessageKey::Tuition => "年間授業料",
        MessageKey::Scholarship => "年間奨学金",
        MessageKey::LivingCost => "年間生活費",
        MessageKey::ProgramLength => "プログラム期間（年）",
        MessageKey::PostGradSalary => "卒業後の想定年収",
        MessageKey::Reputation => "評判",
        MessageKey::Location => "立地",
        MessageKey::ProgramFit => "プログラム適合度",
    }
}

fn ja_template(message: &Message) -> &'static str {
    match message {
        Message::NameRequired => "学校名は必須です",
        Message::MinValue { .. } => "最小値は {min} です",
        Message::MaxValue { .. } => "最大値は {max} です",
        Message::NotFinite => "有限の数値を入力してください",
        Message::RecommendSimilar => {
            "両校の価値は非常に近いです。個人の好みや具体的なプログラム内容を考慮してください。"
        }
        Message::RecommendClearWinner { .. } => {
            "{winner} は費用面と総合的な適合度の両方で優れており、明確なおすすめです。"
        }
        Message::RecommendTradeOff { .. } => {
            "{financial} は費用面で優れていますが、{overall} は総合的な適合度が高いです。優先順位を検討してください。"
        }
        Message::RecommendFinancialOnly { .. } => {
            "{winner} は費用面で優れており、総合的な適合度は両校で同程度です。優先順位を検討してください。"
        }
        Message::RecommendOverallOnly { .. } => {
            "{winner} は総合的な適合度が高く、費用面は両校で同程度です。優先順位を検討してください。"
        }
    }
}

fn es_label(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Evaluador de Escuelas",
        MessageKey::School1 => "Escuela 1",
        MessageKey::School2 => "Escuela 2",
        MessageKey::Metric => "Métrica",
        MessageKey::NetCost => "Costo Neto Anual",
        MessageKey::TotalProgramCost => "Costo Total del Programa",
        MessageKey::EstimatedRoi => "ROI Estimado a 5 Años",
        MessageKey::WeightedScore => "Puntuación Ponderada",
        MessageKey::Recommendation => "Recomendación",
        MessageKey::BetterFinancially => "Mejor Financieramente",
        MessageKey::BetterOverall => "Mejor en General",
        MessageKey::Tie => "Empate",
        MessageKey::NotReady => {
            "Introduce el nombre, la matrícula y la duración del programa de ambas escuelas para ver la comparación."
        }
        MessageKey::Field => "Campo",
        MessageKey::Problem => "Problema",
        MessageKey::SchoolName => "Nombre de la Escuela",
        MessageKey::Tuition => "Matrícula Anual",
        MessageKey::Scholarship => "Beca Anual",
        MessageKey::LivingCost => "Costo de Vida Anual",
        MessageKey::ProgramLength => "Duración del Programa (años)",
        MessageKey::PostGradSalary => "Salario Esperado tras Graduarse",
        MessageKey::Reputation => "Reputación",
        MessageKey::Location => "Ubicación",
        MessageKey::ProgramFit => "Afinidad con el Programa",
    }
}

fn es_template(message: &Message) -> &'static str {
    match message {
        Message::NameRequired => "El nombre de la escuela es obligatorio",
        Message::MinValue { .. } => "El valor mínimo es {min}",
        Message::MaxValue { .. } => "El valor máximo es {max}",
        Message::NotFinite => "El valor debe ser un número finito",
        Message::RecommendSimilar => {
            "Ambas escuelas tienen un valor muy similar. Considera tus preferencias personales y los detalles de cada programa."
        }
        Message::RecommendClearWinner { .. } => {
            "{winner} es la clara ganadora, con mejor valor financiero y mejor afinidad general."
        }
        Message::RecommendTradeOff { .. } => {
            "{financial} ofrece mejor valor financiero, pero {overall} tiene mejor afinidad general. Considera tus prioridades."
        }
        Message::RecommendFinancialOnly { .. } => {
            "{winner} ofrece mejor valor financiero, mientras que ambas escuelas tienen una afinidad general similar. Considera tus prioridades."
        }
        Message::RecommendOverallOnly { .. } => {
            "{winner} tiene mejor afinidad general, mientras que ambas escuelas ofrecen un valor financiero similar. Considera tus prioridades."
        }
    }
}

fn fr_label(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Évaluateur d'Écoles",
        MessageKey::School1 => "École 1",
        MessageKey::School2 => "École 2",
        MessageKey::Metric => "Indicateur",
        MessageKey::NetCost => "Coût Net Annuel",
        MessageKey::TotalProgramCost => "Coût Total du Programme",
        MessageKey::EstimatedRoi => "ROI Estimé sur 5 Ans",
        MessageKey::WeightedScore => "Score Pondéré",
        MessageKey::Recommendation => "Recommandation",
        MessageKey::BetterFinancially => "Meilleure Financièrement",
        MessageKey::BetterOverall => "Meilleure Globalement",
        MessageKey::Tie => "Égalité",
        MessageKey::NotReady => {
            "Saisissez le nom, les frais de scolarité et la durée du programme des deux écoles pour voir la comparaison."
        }
        MessageKey::Field => "Champ",
        MessageKey::Problem => "Problème",
        MessageKey::SchoolName => "Nom de l'École",
        MessageKey::Tuition => "Frais de Scolarité Annuels",
        MessageKey::Scholarship => "Bourse Annuelle",
        MessageKey::LivingCost => "Coût de la Vie Annuel",
        MessageKey::ProgramLength => "Durée du Programme (années)",
        MessageKey::PostGradSalary => "Salaire Attendu après le Diplôme",
        MessageKey::Reputation => "Réputation",
        MessageKey::Location => "Emplacement",
        MessageKey::ProgramFit => "Adéquation du Programme",
    }
}

fn fr_template(message: &Message) -> &'static str {
    match message {
        Message::NameRequired => "Le nom de l'école est obligatoire",
        Message::MinValue { .. } => "La valeur minimale est {min}",
        Message::MaxValue { .. } => "La valeur maximale est {max}",
        Message::NotFinite => "La valeur doit être un nombre fini",
        Message::RecommendSimilar => {
            "Les deux écoles ont une valeur très similaire. Tenez compte de vos préférences personnelles et des détails de chaque programme."
        }
        Message::RecommendClearWinner { .. } => {
            "{winner} l'emporte nettement, avec une meilleure valeur financière et une meilleure adéquation globale."
        }
        Message::RecommendTradeOff { .. } => {
            "{financial} offre une meilleure valeur financière, mais {overall} présente une meilleure adéquation globale. Réfléchissez à vos priorités."
        }
        Message::RecommendFinancialOnly { .. } => {
            "{winner} offre une meilleure valeur financière, tandis que les deux écoles ont une adéquation globale similaire. Réfléchissez à vos priorités."
        }
        Message::RecommendOverallOnly { .. } => {
            "{winner} présente une meilleure adéquation globale, tandis que les deux écoles offrent une valeur financière similaire. Réfléchissez à vos priorités."
        }
    }
}
