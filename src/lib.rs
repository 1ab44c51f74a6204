pub mod configuration;

pub mod activation {
    pub mod activationfunction;
    pub mod domain;
}

pub mod catalog {
    pub mod catalog;
    pub mod functionspec;
}

pub mod evaluation {
    pub mod curve;
    pub mod evaluationerror;
    pub mod evaluationresult;
    pub mod evaluator;
}

pub mod render {
    pub mod plotstyle;
    pub mod plotrenderer;
}

pub mod server {
    pub mod appstate;
    pub mod handlers;
    pub mod response;
    pub mod router;
}
