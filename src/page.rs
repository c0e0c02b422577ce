//! The four mutually exclusive pages of the app.

pub const APP_TITLE: &str = "Health Cost Prediction";

pub const ABOUT_TEXT: &str = "This application predicts health costs from factors such as \
age, BMI, number of children, sex, smoking history and region of residence. \
The prediction is only a simulation and does not replace professional medical advice.";

pub const DATA_PAGE_TEXT: &str = "Historical prediction data is shown here. \
You can track and review predictions based on the inputs that were provided.";

pub const DISCLAIMER: &str =
    "This prediction is a simulation and does not replace professional medical advice.";

pub const NO_RESULT_TEXT: &str = "Please enter your data first to see the prediction result.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Input form with the estimate button.
    #[default]
    InputForm,
    /// Most recent estimate.
    Result,
    /// Static description.
    About,
    /// Historical data table and charts.
    Data,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::InputForm, Page::Result, Page::About, Page::Data];

    pub fn title(self) -> &'static str {
        match self {
            Page::InputForm => "Input Data",
            Page::Result => "Prediction Result",
            Page::About => "About",
            Page::Data => "User Data",
        }
    }

    /// Zero-based position in the navigation list.
    pub fn index(self) -> usize {
        match self {
            Page::InputForm => 0,
            Page::Result => 1,
            Page::About => 2,
            Page::Data => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
